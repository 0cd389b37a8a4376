use crate::errors::MedbenchError;
use crate::types::Selection;

/// Find the median of `data` by quickselect: the value that would sit at
/// index `len / 2` if the sample were sorted ascending.
///
/// Runs in expected linear time without fully sorting. The sample is permuted
/// in place and callers must not rely on any element order afterwards. The
/// returned comparison count covers exactly the partition scans — one per
/// element visited — and nothing else.
///
/// The narrowing is a loop rather than recursion: with a fixed first-element
/// pivot the range can shrink by a single element per pass (sorted or
/// reverse-sorted input), and O(N) recursion depth is a stack risk long
/// before it is a time problem.
pub fn median(data: &mut [i32]) -> Result<Selection, MedbenchError> {
    if data.is_empty() {
        return Err(MedbenchError::EmptySample);
    }

    let mut comparisons = 0u64;
    let target = data.len() / 2;
    let mut low = 0;
    let mut high = data.len() - 1;

    loop {
        if low == high {
            return Ok(Selection {
                value: data[low],
                comparisons,
            });
        }

        let boundary = partition(data, low, high, &mut comparisons);

        if boundary == target {
            return Ok(Selection {
                value: data[boundary],
                comparisons,
            });
        } else if boundary > target {
            high = boundary - 1;
        } else {
            low = boundary + 1;
        }
    }
}

/// Lomuto partition of `data[low..=high]` around the value at `low`.
///
/// Every element strictly less than the pivot is swapped up behind an
/// advancing boundary; the pivot is then swapped into the boundary, which is
/// returned as its final position. Elements left of the boundary are strictly
/// less than the pivot, elements right of it are greater or equal (ties land
/// on the high side). One comparison is counted per scanned element.
pub(crate) fn partition(
    data: &mut [i32],
    low: usize,
    high: usize,
    comparisons: &mut u64,
) -> usize {
    let pivot = data[low];
    let mut boundary = low;

    for j in low + 1..=high {
        *comparisons += 1;
        if data[j] < pivot {
            boundary += 1;
            data.swap(boundary, j);
        }
    }

    data.swap(low, boundary);
    boundary
}

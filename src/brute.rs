use crate::errors::MedbenchError;
use crate::types::Selection;

/// Brute-force reference median: a partial selection sort that places each of
/// the ranks `0..=len / 2` in turn, then reads off the element at the median
/// rank.
///
/// Same contract as `select::median` — the sample is permuted in place and
/// the comparison count covers exactly the minimum scans. Unlike quickselect
/// the count depends only on the sample length, never on the values, which is
/// what makes it a useful baseline in operation-count mode.
pub fn median(data: &mut [i32]) -> Result<Selection, MedbenchError> {
    if data.is_empty() {
        return Err(MedbenchError::EmptySample);
    }

    let mut comparisons = 0u64;
    let target = data.len() / 2;

    for i in 0..=target {
        let mut smallest = i;
        for j in i + 1..data.len() {
            comparisons += 1;
            if data[j] < data[smallest] {
                smallest = j;
            }
        }
        data.swap(i, smallest);
    }

    Ok(Selection {
        value: data[target],
        comparisons,
    })
}

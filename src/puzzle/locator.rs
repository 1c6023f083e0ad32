//! Finds where each PIN digit occurs in a plant.

/// Assigns each digit of `pin` a position in `plant` holding that digit.
///
/// Each digit takes its first occurrence. If that index is already taken
/// by an earlier digit, the search restarts just past the largest index
/// assigned so far, which keeps the list pairwise distinct. Returns `None`
/// as soon as a digit has no usable occurrence.
pub(crate) fn locate(plant: &[u8], pin: &[u8]) -> Option<Vec<usize>> {
    let mut positions: Vec<usize> = Vec::with_capacity(pin.len());

    for &digit in pin {
        let mut found = find_from(plant, digit, 0)?;

        if positions.contains(&found) {
            let past_max = positions.iter().max().map_or(0, |max| max + 1);
            found = find_from(plant, digit, past_max)?;
        }

        positions.push(found);
    }

    Some(positions)
}

fn find_from(plant: &[u8], digit: u8, start: usize) -> Option<usize> {
    plant
        .get(start..)?
        .iter()
        .position(|&d| d == digit)
        .map(|offset| start + offset)
}

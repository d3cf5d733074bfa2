use crate::models::Apartment;

/// Returns every record of `current` with no field-equal match in
/// `previous`, in the order they appear in `current`.
///
/// An empty `previous` means there is nothing to compare against yet
/// (first run or wiped state), so the diff is empty rather than the
/// entire listing.
pub fn diff(previous: &[Apartment], current: &[Apartment]) -> Vec<Apartment> {
    if previous.is_empty() {
        return Vec::new();
    }

    current
        .iter()
        .filter(|apartment| !previous.contains(apartment))
        .cloned()
        .collect()
}

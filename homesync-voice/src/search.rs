use homesync_api::models::Device;

/// Case-insensitive substring search over raw device names.
///
/// A blank query yields nothing: an empty search box means "show nothing",
/// which keeps searching distinct from browsing the full list. Results
/// keep the snapshot's order; there is no ranking.
pub fn filter_devices<'a>(query: &str, devices: &'a [Device]) -> Vec<&'a Device> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    devices
        .iter()
        .filter(|device| device.name.to_lowercase().contains(&needle))
        .collect()
}

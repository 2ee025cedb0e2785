//! Memory and disk capacity queries.

use std::path::Path;

use sysinfo::{Disks, System};

const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Total system RAM in whole GiB (rounded down).
pub fn total_memory_gib() -> u64 {
    let sys = System::new_all();
    sys.total_memory() / BYTES_PER_GIB
}

/// Free space in whole GiB on the filesystem holding `path`.
///
/// Picks the mounted disk with the longest mount-point prefix of the
/// path; an unresolvable path reports zero and earns an advisory
/// rather than failing the probe.
pub fn available_disk_gib(path: &Path) -> u64 {
    let disks = Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| disk.available_space() / BYTES_PER_GIB)
        .unwrap_or(0)
}

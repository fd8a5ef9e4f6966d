//! Platform default locations for the Arc sidebar file.

use std::path::PathBuf;

/// Find the default `StorableSidebar.json` for the current platform.
///
/// Returns `None` when the platform has no known location or nothing
/// exists at it; callers treat that as "input must be given explicitly",
/// not as an error.
pub fn default_sidebar_path() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let home = std::env::var_os("HOME")?;
        let candidate = PathBuf::from(home)
            .join("Library/Application Support/Arc/StorableSidebar.json");
        candidate.is_file().then_some(candidate)
    }

    #[cfg(windows)]
    {
        let local_app_data = std::env::var_os("LOCALAPPDATA")?;
        let packages = PathBuf::from(local_app_data).join("Packages");
        let mut names: Vec<String> = std::fs::read_dir(&packages)
            .ok()?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with("TheBrowserCompany.Arc"))
            .collect();
        names.sort();
        names.into_iter().find_map(|name| {
            let candidate = packages
                .join(name)
                .join("LocalCache")
                .join("Local")
                .join("Arc")
                .join("StorableSidebar.json");
            candidate.is_file().then_some(candidate)
        })
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    {
        None
    }
}

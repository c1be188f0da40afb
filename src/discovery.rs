//! Discovery of dictionary files in well-known per-OS profile locations.
//!
//! Environment lookups are confined to [`DiscoveryEnv::from_system`]; the
//! locator itself only probes the directories it is given, so tests can point
//! it at a temporary tree.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Something that produces candidate dictionary paths.
pub trait DictionaryLocator {
    fn locate(&self) -> Vec<PathBuf>;
}

/// Base directories discovery probes under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryEnv {
    /// User home directory.
    pub home: Option<PathBuf>,
    /// Windows `%APPDATA%` (roaming).
    pub app_data: Option<PathBuf>,
    /// Windows `%LOCALAPPDATA%`.
    pub local_app_data: Option<PathBuf>,
}

impl DiscoveryEnv {
    /// Read the base directories of the current user.
    pub fn from_system() -> Self {
        DiscoveryEnv {
            home: dirs::home_dir(),
            app_data: std::env::var_os("APPDATA").map(PathBuf::from),
            local_app_data: std::env::var_os("LOCALAPPDATA").map(PathBuf::from),
        }
    }

    /// Environment rooted at a single home directory, with no Windows dirs.
    pub fn with_home<P: Into<PathBuf>>(home: P) -> Self {
        DiscoveryEnv {
            home: Some(home.into()),
            ..Default::default()
        }
    }
}

/// Probes the Firefox, Chrome and Apple locations for Linux, macOS and Windows.
#[derive(Debug, Clone)]
pub struct SystemLocator {
    env: DiscoveryEnv,
}

impl SystemLocator {
    pub fn new(env: DiscoveryEnv) -> Self {
        SystemLocator { env }
    }

    /// Firefox `persdict.dat` files, one per profile.
    pub fn firefox(&self) -> Vec<PathBuf> {
        let mut profile_roots = Vec::new();
        if let Some(home) = &self.env.home {
            profile_roots.push(home.join(".mozilla/firefox"));
            profile_roots.push(home.join("Library/Application Support/Firefox/Profiles"));
        }
        if let Some(app_data) = &self.env.app_data {
            profile_roots.push(app_data.join("Mozilla/Firefox/Profiles"));
        }

        profile_roots
            .iter()
            .filter(|root| root.is_dir())
            .flat_map(|root| glob_profiles(root, "persdict.dat"))
            .collect()
    }

    /// Chrome `Custom Dictionary.txt` of the default profile.
    pub fn chrome(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(home) = &self.env.home {
            candidates.push(home.join(".config/google-chrome/Default/Custom Dictionary.txt"));
            candidates.push(home.join(
                "Library/Application Support/Google/Chrome/Default/Custom Dictionary.txt",
            ));
        }
        if let Some(local_app_data) = &self.env.local_app_data {
            candidates.push(
                local_app_data.join("Google/Chrome/User Data/Default/Custom Dictionary.txt"),
            );
        }

        candidates.into_iter().filter(|path| path.is_file()).collect()
    }

    /// The macOS system-wide `LocalDictionary`.
    pub fn apple(&self) -> Vec<PathBuf> {
        self.env
            .home
            .iter()
            .map(|home| home.join("Library/Spelling/LocalDictionary"))
            .filter(|path| path.is_file())
            .collect()
    }
}

impl DictionaryLocator for SystemLocator {
    fn locate(&self) -> Vec<PathBuf> {
        let mut found = self.firefox();
        found.extend(self.chrome());
        found.extend(self.apple());
        debug!("Discovery found {} dictionary files", found.len());
        found
    }
}

/// A fixed list of paths.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator(pub Vec<PathBuf>);

impl DictionaryLocator for StaticLocator {
    fn locate(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}

/// `<root>/*/<file_name>`, with the root escaped so that profile directories
/// containing glob metacharacters are matched literally.
fn glob_profiles(root: &Path, file_name: &str) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/*/{}",
        Pattern::escape(&root.to_string_lossy()),
        file_name
    );

    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Invalid discovery pattern {pattern}: {e}");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable profile entry: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "word\n").unwrap();
    }

    #[test]
    fn test_empty_home_finds_nothing() {
        let home = TempDir::new().unwrap();
        let locator = SystemLocator::new(DiscoveryEnv::with_home(home.path()));
        assert!(locator.locate().is_empty());
    }

    #[test]
    fn test_no_env_finds_nothing() {
        let locator = SystemLocator::new(DiscoveryEnv::default());
        assert!(locator.locate().is_empty());
    }

    #[test]
    fn test_finds_every_vendor_in_order() {
        let home = TempDir::new().unwrap();
        let root = home.path();
        let ff_a = root.join(".mozilla/firefox/abc.default/persdict.dat");
        let ff_b = root.join(".mozilla/firefox/xyz.dev-edition/persdict.dat");
        let chrome = root.join(".config/google-chrome/Default/Custom Dictionary.txt");
        let apple = root.join("Library/Spelling/LocalDictionary");
        for path in [&ff_a, &ff_b, &chrome, &apple] {
            touch(path);
        }
        // A profile without a dictionary is ignored.
        fs::create_dir_all(root.join(".mozilla/firefox/empty.profile")).unwrap();

        let locator = SystemLocator::new(DiscoveryEnv::with_home(root));
        assert_eq!(locator.locate(), vec![ff_a, ff_b, chrome, apple]);
    }

    #[test]
    fn test_windows_locations() {
        let app_data = TempDir::new().unwrap();
        let local_app_data = TempDir::new().unwrap();
        let ff = app_data
            .path()
            .join("Mozilla/Firefox/Profiles/p1.default/persdict.dat");
        let chrome = local_app_data
            .path()
            .join("Google/Chrome/User Data/Default/Custom Dictionary.txt");
        touch(&ff);
        touch(&chrome);

        let env = DiscoveryEnv {
            home: None,
            app_data: Some(app_data.path().to_path_buf()),
            local_app_data: Some(local_app_data.path().to_path_buf()),
        };
        let locator = SystemLocator::new(env);
        assert_eq!(locator.firefox(), vec![ff]);
        assert_eq!(locator.chrome(), vec![chrome]);
        assert!(locator.apple().is_empty());
    }

    #[test]
    fn test_glob_metacharacters_in_root() {
        let home = TempDir::new().unwrap();
        let root = home.path().join("odd[home]");
        let ff = root.join(".mozilla/firefox/p.default/persdict.dat");
        touch(&ff);

        let locator = SystemLocator::new(DiscoveryEnv::with_home(&root));
        assert_eq!(locator.firefox(), vec![ff]);
    }

    #[test]
    fn test_static_locator() {
        let paths = vec![PathBuf::from("a.dat"), PathBuf::from("b.txt")];
        assert_eq!(StaticLocator(paths.clone()).locate(), paths);
    }
}

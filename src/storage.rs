use web_sys::{window, Storage};

/// Small string flags that outlive a page load.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Flags kept in the browser's `localStorage`. Every failure (no window,
/// storage disabled, quota) reads as "absent" and writes as a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageFlags;

impl LocalStorageFlags {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl FlagStore for LocalStorageFlags {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryFlags {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl FlagStore for MemoryFlags {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_flags_roundtrip() {
        let flags = MemoryFlags::default();
        assert_eq!(flags.get("seen"), None);
        flags.set("seen", "1");
        assert_eq!(flags.get("seen").as_deref(), Some("1"));
    }
}

use crate::error::Result;
use std::path::PathBuf;

/// Raw access to named durable slots.
///
/// A slot is a single key holding one serialized string value, in the manner
/// of a browser's local storage. This trait handles the "how" of storage
/// (filesystem vs memory), while `TodoPersistence` handles the "what"
/// (serializing the todo collection, mapping failures).
pub trait SlotBackend {
    /// Read a slot. Returns Ok(None) if the slot was never written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Location of the slot. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn slot_path(&self, key: &str) -> PathBuf;
}

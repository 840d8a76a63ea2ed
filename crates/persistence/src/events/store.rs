//! JSONL Event Store - append-only writer
//!
//! Onboarding olaylarını güne göre bölünmüş JSONL dosyalarına yazar
//! (`data/events/2026-08-05.jsonl`). Audit trail buradan beslenir.

use crate::error::PersistenceResult;
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use zbank_core::OnboardingEvent;

/// Event Store - günlük JSONL dosyalarına olay yazar.
pub struct EventStore {
    /// Olay dosyalarının bulunduğu dizin
    base_path: PathBuf,
    /// Olay ID sayacı
    event_counter: AtomicU64,
    /// Aktif dosya yazıcısı (thread-safe)
    current_writer: Mutex<Option<EventWriter>>,
}

struct EventWriter {
    date: String,
    writer: BufWriter<File>,
}

impl EventStore {
    /// Yeni EventStore
    ///
    /// # Arguments
    /// * `base_path` - Olay dizini (örn. "data/events")
    pub fn new<P: AsRef<Path>>(base_path: P) -> PersistenceResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();

        fs::create_dir_all(&base_path)?;

        // Sayaç mevcut dosyalardan devam eder
        let event_counter = Self::load_event_counter(&base_path)?;

        Ok(Self {
            base_path,
            event_counter: AtomicU64::new(event_counter),
            current_writer: Mutex::new(None),
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Mevcut dosyalardaki en büyük olay numarasından sayacı yükle
    fn load_event_counter(base_path: &Path) -> PersistenceResult<u64> {
        let mut max_id: u64 = 0;

        if let Ok(entries) = fs::read_dir(base_path) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().map_or(false, |ext| ext == "jsonl") {
                    if let Ok(content) = fs::read_to_string(&path) {
                        for line in content.lines() {
                            if let Ok(event) = serde_json::from_str::<OnboardingEvent>(line) {
                                // EVT_000123 -> 123
                                if let Some(num_str) = event.event_id.strip_prefix("EVT_") {
                                    if let Ok(num) = num_str.parse::<u64>() {
                                        max_id = max_id.max(num);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        Ok(max_id + 1)
    }

    fn get_file_path(&self, date: &str) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", date))
    }

    fn current_date() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }

    /// Yeni olay ID üret
    pub fn next_event_id(&self) -> String {
        let id = self.event_counter.fetch_add(1, Ordering::SeqCst);
        format!("EVT_{:06}", id)
    }

    /// Olayı store'a yaz
    pub fn append(&self, event: &OnboardingEvent) -> PersistenceResult<()> {
        let date = Self::current_date();
        let json = serde_json::to_string(event)?;

        let mut guard = self.current_writer.lock().unwrap();

        // Gün değiştiyse yeni dosya gerekir
        let needs_new_file = guard.as_ref().map_or(true, |w| w.date != date);

        if needs_new_file {
            let path = self.get_file_path(&date);
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let writer = BufWriter::new(file);
            *guard = Some(EventWriter {
                date: date.clone(),
                writer,
            });
        }

        if let Some(ref mut w) = *guard {
            writeln!(w.writer, "{}", json)?;
            w.writer.flush()?;
        }

        Ok(())
    }

    /// Birden fazla olay yaz
    pub fn append_batch(&self, events: &[OnboardingEvent]) -> PersistenceResult<()> {
        for event in events {
            self.append(event)?;
        }
        Ok(())
    }

    /// Tüm olay dosyalarını listele
    pub fn list_files(&self) -> PersistenceResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "jsonl") {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Belirli günün dosyası (varsa)
    pub fn get_file_for_date(&self, date: &str) -> Option<PathBuf> {
        let path = self.get_file_path(date);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Bekleyen yazmaları flush et
    pub fn flush(&self) -> PersistenceResult<()> {
        let mut guard = self.current_writer.lock().unwrap();
        if let Some(ref mut w) = *guard {
            w.writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for EventStore {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_event_store_append() {
        let dir = tempdir().unwrap();
        let store = EventStore::new(dir.path()).unwrap();

        let event_id = store.next_event_id();
        let event = OnboardingEvent::customer_registered(&event_id, "self", "ZB-950-48291");

        store.append(&event).unwrap();
        store.flush().unwrap();

        let files = store.list_files().unwrap();
        assert_eq!(files.len(), 1);

        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("EVT_000001"));
        assert!(content.contains("customer_registered"));
    }

    #[test]
    fn test_event_store_counter() {
        let dir = tempdir().unwrap();
        let store = EventStore::new(dir.path()).unwrap();

        assert_eq!(store.next_event_id(), "EVT_000001");
        assert_eq!(store.next_event_id(), "EVT_000002");
        assert_eq!(store.next_event_id(), "EVT_000003");
    }

    #[test]
    fn test_event_store_reload_counter() {
        let dir = tempdir().unwrap();

        {
            let store = EventStore::new(dir.path()).unwrap();
            let event_id = store.next_event_id();
            let event = OnboardingEvent::customer_registered(&event_id, "self", "ZB-950-48291");
            store.append(&event).unwrap();

            let event_id = store.next_event_id();
            let event = OnboardingEvent::profile_saved(&event_id, "self", "ZB-950-48291");
            store.append(&event).unwrap();
        }

        // İkinci açılış - sayaç 3'ten devam etmeli
        {
            let store = EventStore::new(dir.path()).unwrap();
            assert_eq!(store.next_event_id(), "EVT_000003");
        }
    }
}

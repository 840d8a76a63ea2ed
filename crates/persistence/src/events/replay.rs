//! Event Replay - read events from JSONL files
//!
//! Audit ve compliance incelemeleri için olayları dosyadan okur ve filtreler.

use crate::error::{PersistenceError, PersistenceResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use zbank_core::{OnboardingEvent, OnboardingEventType, RiskFlag};

/// Event Reader - JSONL dosyalarından olay okur
pub struct EventReader {
    base_path: PathBuf,
}

impl EventReader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Tek dosyadan tüm olayları oku
    pub fn read_file(&self, file_path: &Path) -> PersistenceResult<Vec<OnboardingEvent>> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let event: OnboardingEvent = serde_json::from_str(&line)?;
            events.push(event);
        }

        Ok(events)
    }

    /// Belirli günün olaylarını oku
    pub fn read_date(&self, date: &str) -> PersistenceResult<Vec<OnboardingEvent>> {
        let file_path = self.base_path.join(format!("{}.jsonl", date));
        if file_path.exists() {
            self.read_file(&file_path)
        } else {
            Ok(Vec::new())
        }
    }

    /// Tarih aralığındaki olayları oku (her iki uç dahil)
    pub fn read_range(&self, from: &str, to: &str) -> PersistenceResult<Vec<OnboardingEvent>> {
        let from_date = NaiveDate::parse_from_str(from, "%Y-%m-%d")
            .map_err(|e| PersistenceError::Other(format!("Invalid from date: {}", e)))?;
        let to_date = NaiveDate::parse_from_str(to, "%Y-%m-%d")
            .map_err(|e| PersistenceError::Other(format!("Invalid to date: {}", e)))?;

        let mut all_events = Vec::new();
        let mut current = from_date;

        while current <= to_date {
            let date_str = current.format("%Y-%m-%d").to_string();
            let events = self.read_date(&date_str)?;
            all_events.extend(events);
            current = current.succ_opt().unwrap_or(current);
        }

        Ok(all_events)
    }

    /// Tüm olayları oku
    pub fn read_all(&self) -> PersistenceResult<Vec<OnboardingEvent>> {
        let mut all_events = Vec::new();

        if !self.base_path.exists() {
            return Ok(all_events);
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.base_path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map_or(false, |ext| ext == "jsonl"))
            .collect();

        files.sort();

        for file_path in files {
            let events = self.read_file(&file_path)?;
            all_events.extend(events);
        }

        Ok(all_events)
    }
}

/// Event Filter - olayları koşula göre süzer
#[derive(Default)]
pub struct EventFilter {
    /// Müşteri numarasına göre
    pub customer_id: Option<String>,
    /// İşlemi yapana göre
    pub actor_id: Option<String>,
    /// Olay türlerine göre
    pub event_types: Option<Vec<OnboardingEventType>>,
    /// Risk bayraklarına göre
    pub risk_flags: Option<Vec<RiskFlag>>,
    /// Yalnız bayraklı olaylar
    pub only_flagged: bool,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: &str) -> Self {
        self.customer_id = Some(customer_id.to_string());
        self
    }

    pub fn actor(mut self, actor_id: &str) -> Self {
        self.actor_id = Some(actor_id.to_string());
        self
    }

    pub fn event_types(mut self, types: Vec<OnboardingEventType>) -> Self {
        self.event_types = Some(types);
        self
    }

    pub fn risk_flags(mut self, flags: Vec<RiskFlag>) -> Self {
        self.risk_flags = Some(flags);
        self
    }

    pub fn flagged_only(mut self) -> Self {
        self.only_flagged = true;
        self
    }

    /// Olay filtreye uyuyor mu
    pub fn matches(&self, event: &OnboardingEvent) -> bool {
        if let Some(ref customer_id) = self.customer_id {
            if event.customer_id != *customer_id {
                return false;
            }
        }

        if let Some(ref actor_id) = self.actor_id {
            if event.actor_id != *actor_id {
                return false;
            }
        }

        if let Some(ref types) = self.event_types {
            if !types.contains(&event.event_type) {
                return false;
            }
        }

        if let Some(ref flags) = self.risk_flags {
            let has_matching_flag = event.risk_flags.iter().any(|f| flags.contains(f));
            if !has_matching_flag {
                return false;
            }
        }

        if self.only_flagged && event.risk_flags.is_empty() {
            return false;
        }

        true
    }

    pub fn apply(&self, events: Vec<OnboardingEvent>) -> Vec<OnboardingEvent> {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Audit özeti - olay log'undan türetilir
pub struct AuditSummary {
    pub total_events: usize,
    pub registered_count: usize,
    pub profile_saved_count: usize,
    pub risk_evaluated_count: usize,
    pub flagged_events: usize,
    pub events_by_flag: HashMap<String, Vec<OnboardingEvent>>,
}

impl AuditSummary {
    /// Olay listesinden özet üret
    pub fn generate(events: &[OnboardingEvent]) -> Self {
        let mut summary = Self {
            total_events: events.len(),
            registered_count: 0,
            profile_saved_count: 0,
            risk_evaluated_count: 0,
            flagged_events: 0,
            events_by_flag: HashMap::new(),
        };

        for event in events {
            match event.event_type {
                OnboardingEventType::CustomerRegistered => summary.registered_count += 1,
                OnboardingEventType::ProfileSaved => summary.profile_saved_count += 1,
                OnboardingEventType::RiskEvaluated => summary.risk_evaluated_count += 1,
                OnboardingEventType::AdvisoryChecked => {}
            }

            if !event.risk_flags.is_empty() {
                summary.flagged_events += 1;

                for flag in &event.risk_flags {
                    summary
                        .events_by_flag
                        .entry(flag.as_str().to_string())
                        .or_insert_with(Vec::new)
                        .push(event.clone());
                }
            }
        }

        summary
    }

    /// Summary text
    pub fn summary(&self) -> String {
        format!(
            "Onboarding Audit:\n\
             - Total events: {}\n\
             - Registrations: {}\n\
             - Profiles saved: {}\n\
             - Risk evaluations: {}\n\
             - Flagged events: {} ({:.1}%)",
            self.total_events,
            self.registered_count,
            self.profile_saved_count,
            self.risk_evaluated_count,
            self.flagged_events,
            (self.flagged_events as f64 / self.total_events.max(1) as f64) * 100.0
        )
    }
}

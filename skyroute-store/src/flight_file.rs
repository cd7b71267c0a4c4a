//! Flat-file flight storage.
//!
//! One flight per line, `flightID,source,destination,distance,seats,active`.
//! Fields are not escaped, so an id containing a comma cannot round-trip.
//! Bookings and pending requests are never written.

use serde::Serialize;
use skyroute_shared::Flight;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const FIELD_COUNT: usize = 6;

/// A flight parsed from the file, with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub line_number: usize,
    pub content: String,
    pub flight: Flight,
}

/// A line that was not loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line_number: usize,
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SkipReason {
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    #[error("distance is not a positive integer")]
    InvalidDistance,
    #[error("seats is not a non-negative integer")]
    InvalidSeats,
    #[error("duplicate flight id")]
    DuplicateId,
    #[error("registry is full")]
    RegistryFull,
}

#[derive(Debug, Default)]
pub struct LoadedFlights {
    pub records: Vec<FlightRecord>,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub struct FlightFileStore {
    path: PathBuf,
}

impl FlightFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every well-formed line. A missing file is an empty store.
    pub fn load(&self) -> Result<LoadedFlights, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No flight file at {}, starting empty", self.path.display());
                return Ok(LoadedFlights::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let loaded = parse_flights(&contents);
        info!(
            "Loaded {} flights from {} ({} lines skipped)",
            loaded.records.len(),
            self.path.display(),
            loaded.skipped.len()
        );
        Ok(loaded)
    }

    /// Overwrite the file with `flights` in iteration order
    pub fn save<'a>(&self, flights: impl IntoIterator<Item = &'a Flight>) -> Result<(), StoreError> {
        let lines: Vec<String> = flights.into_iter().map(format_line).collect();
        std::fs::write(&self.path, lines.join("\n")).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved {} flights to {}", lines.len(), self.path.display());
        Ok(())
    }
}

/// Parse file contents. Blank lines are ignored silently; every other
/// rejected line is reported in `skipped` and logged.
pub fn parse_flights(contents: &str) -> LoadedFlights {
    let mut loaded = LoadedFlights::default();

    for (i, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(flight) => loaded.records.push(FlightRecord {
                line_number: i + 1,
                content: line.to_string(),
                flight,
            }),
            Err(reason) => {
                warn!("Skipping flight line {}: {} ({:?})", i + 1, reason, line);
                loaded.skipped.push(SkippedLine {
                    line_number: i + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    loaded
}

pub fn parse_line(line: &str) -> Result<Flight, SkipReason> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(parts.len()));
    }

    let distance: u32 = parts[3].parse().map_err(|_| SkipReason::InvalidDistance)?;
    if distance == 0 {
        return Err(SkipReason::InvalidDistance);
    }
    let seats: u32 = parts[4].parse().map_err(|_| SkipReason::InvalidSeats)?;
    let active = parts[5].eq_ignore_ascii_case("true");

    Ok(Flight::restored(parts[0], parts[1], parts[2], distance, seats, active))
}

pub fn format_line(flight: &Flight) -> String {
    format!(
        "{},{},{},{},{},{}",
        flight.id, flight.source, flight.destination, flight.distance, flight.seats, flight.active
    )
}

//! Flat-file Member Snapshot Adapter
//!
//! Writes the member details report as a fixed-width text table:
//!
//! ```text
//! ID      Name                  Location              ...
//! ----------------------------------------------------...
//! 1       Sita Rai              Kathmandu             ...
//! ----------------------------------------------------...
//! ```
//!
//! Columns are separated by at least two spaces, so a cell may contain
//! single spaces ("Rs. 6500.00") but never a run of two. Empty cells are
//! written as `N/A` to keep columns aligned, so a profile value that is
//! literally `N/A` reads back as empty.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{MemberId, Money};
use crate::domain::membership::{MemberKind, MemberProfile};
use crate::ports::{MemberRow, MemberSnapshotStore, SettlementColumns, SnapshotStoreError};

/// Default length of the dashed separator lines.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 250;

const NOT_APPLICABLE: &str = "N/A";

/// Header label and minimum width of every column, in file order.
const COLUMNS: [(&str, usize); 16] = [
    ("ID", 6),
    ("Name", 20),
    ("Location", 20),
    ("Phone", 12),
    ("Email", 30),
    ("Gender", 8),
    ("DOB", 12),
    ("Start Date", 20),
    ("Type", 10),
    ("Plan/Trainer", 15),
    ("Price", 15),
    ("Status", 15),
    ("Full Pay", 12),
    ("Paid Amount", 15),
    ("Remaining", 15),
    ("Discount", 15),
];

static COLUMN_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid column gap regex"));

/// File-based storage for the member details report
#[derive(Debug, Clone)]
pub struct FlatFileSnapshotStore {
    path: PathBuf,
    backup_path: PathBuf,
    separator_width: usize,
}

impl FlatFileSnapshotStore {
    /// Create a store writing to `path`, copying any previous report to
    /// `backup_path` before each save.
    ///
    /// # Example
    /// ```ignore
    /// let store = FlatFileSnapshotStore::new("MemberDetails.txt", "MemberDetails.bak");
    /// ```
    pub fn new<P: AsRef<Path>, B: AsRef<Path>>(path: P, backup_path: B) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            backup_path: backup_path.as_ref().to_path_buf(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }

    pub fn with_separator_width(mut self, width: usize) -> Self {
        self.separator_width = width.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    fn separator(&self) -> String {
        "-".repeat(self.separator_width)
    }

    async fn ensure_parent(&self, path: &Path) -> Result<(), SnapshotStoreError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapshotStoreError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }

    async fn backup_existing(&self) -> Result<(), SnapshotStoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.ensure_parent(&self.backup_path).await?;
        fs::copy(&self.path, &self.backup_path).await.map_err(|e| {
            tracing::warn!(
                path = %self.path.display(),
                backup = %self.backup_path.display(),
                error = %e,
                "Failed to back up member details"
            );
            SnapshotStoreError::IoError(e.to_string())
        })?;
        Ok(())
    }

    fn render(&self, rows: &[MemberRow]) -> String {
        let separator = self.separator();
        let mut out = String::new();

        let header: Vec<String> = COLUMNS.iter().map(|(label, _)| label.to_string()).collect();
        out.push_str(&format_line(&header));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');

        for row in rows {
            out.push_str(&format_line(&row_cells(row)));
            out.push('\n');
        }

        out.push_str(&separator);
        out.push('\n');
        out
    }
}

fn format_line(cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Collapses whitespace runs so a cell never contains a column gap.
fn cell(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        collapsed
    }
}

fn row_cells(row: &MemberRow) -> Vec<String> {
    let p = &row.profile;
    let mut cells = vec![
        row.id.to_string(),
        cell(&p.name),
        cell(&p.location),
        cell(&p.phone),
        cell(&p.email),
        cell(&p.gender),
        cell(&p.date_of_birth),
        cell(&p.membership_start_date),
        row.kind.label().to_string(),
        cell(&row.plan_or_trainer),
        row.price.to_string(),
        row.status_label().to_string(),
    ];

    match &row.settlement {
        Some(s) => cells.extend([
            s.full_payment.to_string(),
            s.paid_amount.to_string(),
            s.remaining_amount.to_string(),
            s.discount_amount.to_string(),
        ]),
        None => cells.extend(std::iter::repeat(NOT_APPLICABLE.to_string()).take(4)),
    }
    cells
}

fn text(value: &str) -> String {
    if value == NOT_APPLICABLE {
        String::new()
    } else {
        value.to_string()
    }
}

fn money(value: &str) -> Option<Money> {
    value.strip_prefix("Rs. ")?.parse().ok()
}

/// Parses one table row; `None` if the row is malformed.
fn parse_row(line: &str) -> Option<MemberRow> {
    let fields: Vec<&str> = COLUMN_GAP.split(line.trim()).collect();
    if fields.len() != COLUMNS.len() {
        return None;
    }

    let id: MemberId = fields[0].parse().ok()?;
    let kind = MemberKind::from_label(fields[8])?;
    let active = match fields[11] {
        "Active" => true,
        "Inactive" => false,
        _ => return None,
    };

    let settlement = match kind {
        MemberKind::MeteredPlan => None,
        MemberKind::Prepaid => Some(SettlementColumns {
            full_payment: fields[12].parse().ok()?,
            paid_amount: money(fields[13])?,
            remaining_amount: money(fields[14])?,
            discount_amount: money(fields[15])?,
        }),
    };

    Some(MemberRow {
        id,
        profile: MemberProfile {
            name: text(fields[1]),
            location: text(fields[2]),
            phone: text(fields[3]),
            email: text(fields[4]),
            gender: text(fields[5]),
            date_of_birth: text(fields[6]),
            membership_start_date: text(fields[7]),
        },
        kind,
        plan_or_trainer: text(fields[9]),
        price: money(fields[10])?,
        active,
        settlement,
    })
}

#[async_trait]
impl MemberSnapshotStore for FlatFileSnapshotStore {
    async fn save(&self, rows: &[MemberRow]) -> Result<(), SnapshotStoreError> {
        self.backup_existing().await?;
        self.ensure_parent(&self.path).await?;

        fs::write(&self.path, self.render(rows)).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to write member details");
            SnapshotStoreError::IoError(e.to_string())
        })?;

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "Member details written");
        Ok(())
    }

    async fn load(&self) -> Result<Vec<MemberRow>, SnapshotStoreError> {
        if !self.path.exists() {
            return Err(SnapshotStoreError::NotFound(self.location()));
        }

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        // Header and opening separator.
        let mut rows = Vec::new();
        for (number, line) in contents.lines().enumerate().skip(2) {
            if line.starts_with('-') {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match parse_row(line) {
                Some(row) => rows.push(row),
                None => {
                    tracing::warn!(path = %self.path.display(), line = number + 1, "Skipping malformed member row")
                }
            }
        }
        Ok(rows)
    }

    fn location(&self) -> String {
        std::env::current_dir()
            .map(|dir| dir.join(&self.path))
            .unwrap_or_else(|_| self.path.clone())
            .display()
            .to_string()
    }
}

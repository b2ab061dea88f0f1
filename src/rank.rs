//! Dense competition ranking for blueprint "Rank" columns.
//!
//! Row and column totals are ranked by descending value: the highest total is
//! priority 1, equal totals share a priority, and the next distinct value
//! takes the immediately following number (dense ranking — ties introduce no
//! gaps). Display convention from the printed worksheet: priorities past
//! [`MAX_PRIORITY`] all report as [`MAX_PRIORITY`], and a zero total has no
//! priority at all — it prints as a dash, never as a number.

use alloc::vec::Vec;

use hashbrown::HashMap;

/// Display ceiling for priorities: 10th place and beyond all rank 10.
pub const MAX_PRIORITY: u8 = 10;

/// Priority of one row or column total.
///
/// `Unranked` is the sentinel for a zero (or absent) total — it is not a
/// numeric rank and displays as `-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Zero total: no meaningful rank.
    Unranked,
    /// Dense competition rank, 1 (highest total) through [`MAX_PRIORITY`].
    Ranked(u8),
}

impl Priority {
    /// The numeric rank, or `None` for [`Priority::Unranked`].
    pub fn value(self) -> Option<u8> {
        match self {
            Priority::Ranked(r) => Some(r),
            Priority::Unranked => None,
        }
    }

    /// True unless this is the zero-total sentinel.
    pub fn is_ranked(self) -> bool {
        matches!(self, Priority::Ranked(_))
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Priority::Ranked(r) => write!(f, "{}", r),
            Priority::Unranked => f.write_str("-"),
        }
    }
}

/// Rank `totals` by descending value, densely, clamped at [`MAX_PRIORITY`].
///
/// The output is positionally aligned with the input. Zero entries emit
/// [`Priority::Unranked`]; equal positive entries share a rank.
///
/// ```rust
/// use tos_core::rank::{priorities, Priority};
///
/// let ranks = priorities(&[5, 5, 3, 0]);
/// assert_eq!(
///     ranks,
///     vec![
///         Priority::Ranked(1),
///         Priority::Ranked(1),
///         Priority::Ranked(2),
///         Priority::Unranked,
///     ],
/// );
/// ```
pub fn priorities(totals: &[u32]) -> Vec<Priority> {
    if totals.is_empty() {
        return Vec::new();
    }

    let mut distinct: Vec<u32> = totals.iter().copied().filter(|&v| v > 0).collect();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    // Only positive values enter the table, so a lookup miss is exactly the
    // zero-total sentinel case.
    let mut rank_of: HashMap<u32, u8> = HashMap::with_capacity(distinct.len());
    for (pos, &v) in distinct.iter().enumerate() {
        let rank = (pos + 1).min(usize::from(MAX_PRIORITY)) as u8;
        rank_of.insert(v, rank);
    }

    totals
        .iter()
        .map(|v| match rank_of.get(v) {
            Some(&rank) => Priority::Ranked(rank),
            None => Priority::Unranked,
        })
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

//! Score derivation for equipment observations.
//!
//! Pure functions, no side effects. The formulas are contractual and must
//! not drift:
//!
//! - `kesesuaian_kontrak` is `2` when the observed quantity meets the
//!   contractual standard, else `0`.
//! - `kondisi_fisik` is `0` when no unit is judged physically unfit,
//!   else `-1`.
//! - `kondisi_fungsi` is `0` when no unit is judged non-functional,
//!   else `-1`.
//! - `score_item` is the sum of the three, so its range is exactly
//!   `{-2, -1, 0, 1, 2}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Compliance status label attached to items and vendor assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplianceStatus {
    #[serde(rename = "Sesuai")]
    Sesuai,
    #[serde(rename = "Tidak Sesuai")]
    TidakSesuai,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Sesuai => write!(f, "Sesuai"),
            ComplianceStatus::TidakSesuai => write!(f, "Tidak Sesuai"),
        }
    }
}

/// One raw equipment observation as submitted by an assessor.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub required_qty: i32,
    pub actual_qty: i32,
    pub tidak_layak: i32,
    pub tidak_berfungsi: i32,
}

/// Derived sub-scores and composite score for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemScore {
    pub kesesuaian_kontrak: i32,
    pub kondisi_fisik: i32,
    pub kondisi_fungsi: i32,
    pub score_item: i32,
    pub status_kesesuaian: ComplianceStatus,
}

/// Derive the sub-scores and composite score for one observation.
pub fn score_item(obs: &Observation) -> ItemScore {
    let kesesuaian_kontrak = if obs.actual_qty >= obs.required_qty {
        2
    } else {
        0
    };
    let kondisi_fisik = if obs.tidak_layak == 0 { 0 } else { -1 };
    let kondisi_fungsi = if obs.tidak_berfungsi == 0 { 0 } else { -1 };

    let status_kesesuaian = if obs.actual_qty >= obs.required_qty {
        ComplianceStatus::Sesuai
    } else {
        ComplianceStatus::TidakSesuai
    };

    ItemScore {
        kesesuaian_kontrak,
        kondisi_fisik,
        kondisi_fungsi,
        score_item: kesesuaian_kontrak + kondisi_fisik + kondisi_fungsi,
        status_kesesuaian,
    }
}

/// Arithmetic mean of item scores. Returns `None` for an empty slice: an
/// assessment with no items is an input-validation error at the caller,
/// never a zero score.
pub fn total_score(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i32 = scores.iter().sum();
    Some(f64::from(sum) / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(required_qty: i32, actual_qty: i32, tidak_layak: i32, tidak_berfungsi: i32) -> Observation {
        Observation {
            required_qty,
            actual_qty,
            tidak_layak,
            tidak_berfungsi,
        }
    }

    #[test]
    fn truth_table() {
        // (required, actual, tidak_layak, tidak_berfungsi)
        //   -> (kontrak, fisik, fungsi, score, status)
        let cases = [
            (2, 3, 0, 0, 2, 0, 0, 2, ComplianceStatus::Sesuai),
            (2, 2, 0, 0, 2, 0, 0, 2, ComplianceStatus::Sesuai),
            (2, 1, 0, 0, 0, 0, 0, 0, ComplianceStatus::TidakSesuai),
            (2, 3, 1, 0, 2, -1, 0, 1, ComplianceStatus::Sesuai),
            (2, 3, 0, 1, 2, 0, -1, 1, ComplianceStatus::Sesuai),
            (2, 3, 1, 1, 2, -1, -1, 0, ComplianceStatus::Sesuai),
            (2, 1, 1, 0, 0, -1, 0, -1, ComplianceStatus::TidakSesuai),
            (2, 1, 0, 1, 0, 0, -1, -1, ComplianceStatus::TidakSesuai),
            (2, 1, 1, 1, 0, -1, -1, -2, ComplianceStatus::TidakSesuai),
            (0, 0, 0, 0, 2, 0, 0, 2, ComplianceStatus::Sesuai),
        ];

        for (required, actual, tl, tb, kontrak, fisik, fungsi, score, status) in cases {
            let derived = score_item(&obs(required, actual, tl, tb));
            assert_eq!(derived.kesesuaian_kontrak, kontrak, "kontrak for {:?}", (required, actual));
            assert_eq!(derived.kondisi_fisik, fisik, "fisik for tidak_layak={}", tl);
            assert_eq!(derived.kondisi_fungsi, fungsi, "fungsi for tidak_berfungsi={}", tb);
            assert_eq!(derived.score_item, score);
            assert_eq!(derived.status_kesesuaian, status);
        }
    }

    #[test]
    fn score_stays_in_range() {
        for required in 0..4 {
            for actual in 0..4 {
                for tl in 0..3 {
                    for tb in 0..3 {
                        let derived = score_item(&obs(required, actual, tl, tb));
                        assert!((-2..=2).contains(&derived.score_item));
                        assert_eq!(
                            derived.score_item,
                            derived.kesesuaian_kontrak
                                + derived.kondisi_fisik
                                + derived.kondisi_fungsi
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn contract_compliance_iff_quantity_met() {
        assert_eq!(score_item(&obs(5, 5, 0, 0)).kesesuaian_kontrak, 2);
        assert_eq!(score_item(&obs(5, 6, 0, 0)).kesesuaian_kontrak, 2);
        assert_eq!(score_item(&obs(5, 4, 0, 0)).kesesuaian_kontrak, 0);
    }

    #[test]
    fn total_score_is_mean() {
        assert_eq!(total_score(&[2, 0]), Some(1.0));
        assert_eq!(total_score(&[2]), Some(2.0));
        let third = total_score(&[2, 1, -2]).expect("non-empty");
        assert!((third - (1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn total_score_rejects_empty_input() {
        assert_eq!(total_score(&[]), None);
    }

    #[test]
    fn compliance_status_labels() {
        assert_eq!(ComplianceStatus::Sesuai.to_string(), "Sesuai");
        assert_eq!(ComplianceStatus::TidakSesuai.to_string(), "Tidak Sesuai");
    }
}

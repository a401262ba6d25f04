//! Score presentation: banner, legend, status chips and per-axis tiles.

use crate::models::{AxisAssessment, OverallVerdict, RiskAxis};
use crate::render::escape::esc;
use crate::sanitize::sanitize_lines;
use crate::scoring::{level_color, level_of, BANDS, SCORE_MAX};

/// Colored level chip with the raw score next to it.
pub fn status_chip_html(score: i64) -> String {
    let level = level_of(score);
    let color = level_color(score);
    format!(
        "<span class='status-chip' style='background:{}'>{}</span> \
        <span class='score-small'>{}/{}</span>",
        color,
        esc(level.as_str()),
        score,
        SCORE_MAX
    )
}

/// Color legend mapping every band to its score range.
pub fn legend_html() -> String {
    let mut pills = String::new();
    for (lo, hi, level) in BANDS {
        pills.push_str(&format!(
            "<span class='pill' style='background:{}'>{} ({}~{})</span>",
            level.color(),
            level.as_str(),
            lo,
            hi
        ));
    }
    format!("<div class='legend'>{}</div>", pills)
}

/// Top-of-page verdict banner tinted with the level color.
pub fn banner_html(overall: &OverallVerdict) -> String {
    format!(
        "<div class='subcard' style='background:{}; color:#fff;'>\
        <span class='score-text'>{} 결과: {}</span>\
        <br><b>{}</b>\
        </div>",
        overall.bg,
        overall.emoji,
        esc(overall.level.as_str()),
        esc(&overall.summary)
    )
}

/// One tile per axis in fixed order. Axes the model skipped render as
/// fully safe defaults, and line lists are filtered again on the way out
/// so nothing unsanitized can reach the page.
pub fn axis_tiles_html(dims: &[AxisAssessment]) -> String {
    let mut tiles = String::new();
    for axis in RiskAxis::ALL {
        let assessment = dims
            .iter()
            .find(|d| d.axis == axis)
            .cloned()
            .unwrap_or_else(|| AxisAssessment::default_for(axis));
        let rationale = sanitize_lines(&assessment.rationale);
        let mitigations = sanitize_lines(&assessment.mitigations);
        tiles.push_str(&format!(
            "<div class='risk-tile'><h5>{}</h5>\
            <div class='status-line'>{}</div>\
            <div class='anno'><b>위험 요소</b><ul>{}</ul></div>\
            <div class='anno'><b>수정 제안(리스크 완화)</b><ul>{}</ul></div>\
            </div>",
            esc(axis.as_str()),
            status_chip_html(assessment.score),
            bullet_list(&rationale),
            bullet_list(&mitigations)
        ));
    }
    format!("<div class='risk-grid'>{}</div>", tiles)
}

/// First three lines as list items, the first one bold.
fn bullet_list(lines: &[String]) -> String {
    let mut items = String::new();
    for (i, line) in lines.iter().take(3).enumerate() {
        if i == 0 {
            items.push_str(&format!("<li><b>{}</b></li>", esc(line)));
        } else {
            items.push_str(&format!("<li>{}</li>", esc(line)));
        }
    }
    items
}

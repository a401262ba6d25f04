//! Standalone HTML report
//!
//! Reproduces the full audit page: verdict banner, key visual overlays,
//! per-axis tiles for both sources and the highlighted caption.

use anyhow::Result;

use crate::highlight::highlight_caption;
use crate::models::{AuditRequest, RiskReport};
use crate::render::escape::esc;
use crate::render::overlay::build_overlays;
use crate::render::tiles::{axis_tiles_html, banner_html, legend_html};

pub const PAGE_CSS: &str = "<style>\n\
body{font-family:'Apple SD Gothic Neo','Malgun Gothic',sans-serif;max-width:1400px;margin:0 auto;padding:24px;background:#f8fafc;color:#111827}\n\
.note-muted{color:#6b7280;font-size:13px;margin:4px 0}\n\
.anno{font-size:14px;margin:6px 0}\n\
.section-sep{border:0;border-top:1px solid #e5e7eb;margin:18px 0}\n\
.card{border:0;border-radius:0;padding:0;margin:6px 0 14px 0;}\n\
.card h4{margin:0 0 10px 0; padding:0; background:transparent;}\n\
.subcard{border:1px solid #e5e7eb;border-radius:12px;padding:12px;background:#fff;margin:10px 0}\n\
.score-text{font-weight:900;font-size:26px}\n\
.legend{display:flex;gap:8px;flex-wrap:wrap;margin-top:8px}\n\
.legend .pill{border-radius:999px;padding:2px 8px;font-size:12px;color:#fff}\n\
.risk-grid{display:grid;grid-template-columns:repeat(2,1fr);gap:12px;margin-top:6px}\n\
.risk-tile{border:1px solid #e2e8f0;border-radius:12px;background:#fff;padding:12px}\n\
.risk-tile h5{margin:0 0 8px 0;font-size:14px}\n\
.status-line{display:flex;align-items:center;gap:10px;margin-bottom:6px}\n\
.status-chip{display:inline-block; min-width:108px; text-align:center; border-radius:10px; padding:4px 8px; color:#fff; font-weight:800; font-size:13px;}\n\
.score-small{font-size:12px; color:#6b7280; font-weight:700}\n\
.kv-wrap{position:relative;width:100%}\n\
.kv-img{width:100%;height:auto;border-radius:8px;border:1px solid #e5e7eb;display:block}\n\
.kv-svg{position:absolute;left:0;top:0;width:100%;height:100%;pointer-events:auto}\n\
.kv-badge{position:absolute; right:10px; top:10px; background:rgba(17,24,39,.8); color:#fff; font-size:12px; padding:4px 8px; border-radius:999px; z-index:4;}\n\
.kv-hot{stroke:#FF1F1F; stroke-width:3; fill:rgba(255,31,31,var(--alpha,0.20)); filter:url(#kv-glow); cursor:pointer}\n\
.kv-hot.warn{stroke:#F59E0B; fill:rgba(245,158,11,var(--alpha,0.20))}\n\
.kv-hot.caution{stroke:#D97706; fill:rgba(217,119,6,var(--alpha,0.20))}\n\
.kv-hot:hover{stroke-width:4}\n\
.caption-strong{font-size:18px; font-weight:900}\n\
.caption-flag{color:#FF1F1F; font-weight:900; background:rgba(255,31,31,.08); padding:0 2px; border-radius:4px;}\n\
</style>";

/// Render the complete report page. Needs the original request alongside
/// the report because the caption text and raw image bytes never travel
/// inside the report itself.
pub fn render_report_html(report: &RiskReport, request: &AuditRequest) -> Result<String> {
    let mut body = String::new();

    body.push_str("<h1>⚠️ Creative Risk Auditor</h1>");
    body.push_str(
        "<div class='note-muted'>※ 각 축 25점 만점(높을수록 안전). \
        최종 판정은 ‘최악 축(가장 낮은 점수)’ 기준으로 결정됨. \
        (성과/효율 평가는 하지 않습니다)</div>",
    );

    body.push_str(&banner_html(&report.overall));

    body.push_str("<div class='card'><h4>Key Visual 평가 결과</h4>");
    body.push_str("<div class='note-muted'>Key Visual 내 Risk가 존재하는 영역을 표시합니다.</div>");
    for overlay in build_overlays(&report.image_risk.image_feedback, &request.images) {
        body.push_str(&format!("<div class='subcard'>{}</div>", overlay.html));
        if !overlay.notes.is_empty() {
            body.push_str(&format!(
                "<div class='anno'><b>{}</b></div>",
                esc(&overlay.notes)
            ));
        }
    }
    body.push_str("</div>");

    body.push_str("<div class='card'><h4>Key Visual 세부 평가 내용</h4>");
    body.push_str(&legend_html());
    body.push_str(&axis_tiles_html(&report.image_risk.core_dimensions));
    body.push_str("</div>");

    body.push_str("<hr class='section-sep'/>");

    body.push_str("<div class='card'><h4>카피라이트(캡션) 입력 원문</h4>");
    let caption: &str = if request.caption.is_empty() {
        "(입력 없음)"
    } else {
        &request.caption
    };
    let highlighted = highlight_caption(caption, &report.text_risk.text_feedback.flags)?;
    body.push_str(&format!("<div class='subcard'>{}</div>", highlighted));
    body.push_str("</div>");

    body.push_str("<div class='card'><h4>카피라이트(캡션) 세부 평가 내용</h4>");
    body.push_str(&legend_html());
    body.push_str(&axis_tiles_html(&report.text_risk.core_dimensions));
    body.push_str("</div>");

    body.push_str(&format!(
        "<div class='note-muted'>분석 시각: {}</div>",
        esc(&report.analyzed_at)
    ));

    Ok(format!(
        "<!DOCTYPE html><html lang=\"ko\"><head><meta charset=\"utf-8\"/>\
        <title>Creative Risk Auditor</title>{}</head><body>{}</body></html>",
        PAGE_CSS, body
    ))
}

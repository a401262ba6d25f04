//! Audit prompts sent to Gemini
//!
//! Both prompts demand JSON-only answers and forbid any mention of
//! marketing performance, which the sanitize layer enforces again on the
//! way back.

use crate::models::AuditRequest;

pub const TEXT_RISK_PROMPT: &str = r#"
당신은 글로벌 마케팅 거버넌스 'Risk' 심사관이다.
여기서 'Risk'란 **논란이나 큰 문제가 될 수 있는 요소**를 뜻한다.
예: 법적·규정 위반 가능성, 윤리/차별/혐오, 정치·종교·문화 감수성 침해, 환경/지속가능성 침해, 잘못된 주장/오해 유발 등.

⚠️ 금지: 클릭/전환/CTR/매출/브랜딩 효과 등 **마케팅의 성과·효율성**에 대한 언급·평가·제안은 절대 포함하지 마라.
수정 제안 역시 오직 **Risk 완화/제거**를 위한 조치로만 제시한다(효과성 최적화 제안 금지).

입력 텍스트의 **안전도**를 정치·문화·환경·사회 4축으로 각 0~25점(높을수록 안전) 평가하라.
각 축: score(0~25), why(25점이어도 Risk 관점 코멘트), edits(완화/제거 조치), checks(필요 점검).
JSON ONLY:
{
  "country":"",
  "core_dimensions":[
    {"name":"Political","score":0,"why":[""],"edits":[""],"checks":[""]},
    {"name":"Cultural","score":0,"why":[""],"edits":[""],"checks":[""]},
    {"name":"Environmental","score":0,"why":[""],"edits":[""],"checks":[""]},
    {"name":"Social","score":0,"why":[""],"edits":[""],"checks":[""]}
  ],
  "text_feedback":{"flags":[{"span":"","issues":[""],"edits":[""]}]}
}
주의: 번호/원형숫자 기호는 넣지 말라. 성과/효율 관련 언급 금지.
"#;

pub const IMAGE_RISK_PROMPT: &str = r#"
당신은 글로벌 마케팅 거버넌스 'Risk' 심사관이다.
'Risk'는 **논란이나 큰 문제가 될 수 있는 요소**로 한정한다(법/윤리/차별/정치·종교·문화 감수성/환경/오해 소지).
⚠️ 금지: 클릭/전환/CTR/매출/브랜딩 효과 등 **마케팅 성과·효율성** 언급·평가·제안.

업로드된 Key Visual의 **안전도**를 정치·문화·환경·사회 4축으로 각 0~25점(높을수록 안전) 평가하라.
각 축: score/why/edits/checks. 각 이미지 index(1부터) notes와 **Risk가 존재하는 영역만** 핫스팟(0~1 좌표) 제공.
핫스팟에는 가능하면 severity(매우 위험/위험/주의)를 포함하라. edits는 **Risk 완화/제거 조치**로만 작성.

JSON ONLY:
{
  "country":"",
  "core_dimensions":[
    {"name":"Political","score":0,"why":[""],"edits":[""],"checks":[""]},
    {"name":"Cultural","score":0,"why":[""],"edits":[""],"checks":[""]},
    {"name":"Environmental","score":0,"why":[""],"edits":[""],"checks":[""]},
    {"name":"Social","score":0,"why":[""],"edits":[""],"checks":[""]}
  ],
  "image_feedback":[
    {"index":1,"notes":"","hotspots":[
      {"shape":"circle","cx":0.65,"cy":0.42,"r":0.08,"label":"","severity":"매우 위험","risks":[""],"suggested_edits":[""]}
    ]}
  ]
}
주의: 번호/원형숫자 기호는 넣지 말라. 성과/효율 관련 언급 금지.
"#;

/// Context block appended to the text prompt. Empty sector and caption
/// fields turn into explicit placeholders so the model never sees a bare
/// heading.
pub fn text_context(country: &str, sector: &str, caption: &str) -> String {
    let sector = if sector.is_empty() { "(미지정)" } else { sector };
    let trimmed = caption.trim();
    let caption = if trimmed.is_empty() {
        "(제공 없음)"
    } else {
        trimmed
    };
    format!(
        "[국가/지역]\n{}\n[산업/카테고리]\n{}\n[텍스트]\n{}",
        country, sector, caption
    )
}

/// Context block appended to the image prompt. Images travel as separate
/// request parts, so the block only fixes their numbering convention.
pub fn image_context(country: &str, sector: &str) -> String {
    let sector = if sector.is_empty() { "(미지정)" } else { sector };
    format!(
        "[국가/지역]\n{}\n[산업/카테고리]\n{}\n[이미지] 업로드 순서 기준 1부터.",
        country, sector
    )
}

pub fn text_prompt(request: &AuditRequest) -> String {
    format!(
        "{}\n\n{}",
        TEXT_RISK_PROMPT,
        text_context(&request.country, &request.sector, &request.caption)
    )
}

pub fn image_prompt(request: &AuditRequest) -> String {
    format!(
        "{}\n\n{}",
        IMAGE_RISK_PROMPT,
        image_context(&request.country, &request.sector)
    )
}

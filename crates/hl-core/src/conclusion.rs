//! Single-date façade: snapshot in, conclusion out.
//!
//! Every call runs the whole pipeline again. Nothing is cached between calls.

use chrono::NaiveDate;
use serde::Serialize;

use crate::activity::{ActivityList, finalize, resolve_raw_lists};
use crate::almanac::AlmanacSnapshot;
use crate::config::RenderConfig;
use crate::error::HlResult;
use crate::grade::{Grade, apply_global_forbidden, grade_day};
use crate::render::{render, template_for};
use crate::taboo::{HardTaboo, detect_hard_taboo};

/// The finished verdict for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayConclusion {
    /// The date graded.
    pub date: NaiveDate,
    /// Heading label, e.g. `建日·青龙`.
    pub label: String,
    /// Final grade after all overrides.
    pub grade: Grade,
    /// Final 宜 list.
    pub recommended: ActivityList,
    /// Final 忌 list.
    pub forbidden: ActivityList,
    /// Rendered narrative, without the date line.
    pub text: String,
    /// Why the day is hard-taboo, if it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taboo: Option<HardTaboo>,
}

impl DayConclusion {
    /// Narrative prefixed with the ISO date line.
    pub fn dated_text(&self) -> String {
        format!("{}\n{}", self.date.format("%Y-%m-%d"), self.text)
    }
}

/// Builds day conclusions with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ConclusionRenderer {
    config: RenderConfig,
}

impl ConclusionRenderer {
    /// Create a renderer.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The renderer's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Heading label: `{officer}日·{god}`, whichever one is present, or the
    /// configured default.
    pub fn label(&self, almanac: &AlmanacSnapshot) -> String {
        match (almanac.officer_label(), almanac.day_god_label()) {
            (Some(officer), Some(god)) => format!("{officer}日·{god}"),
            (Some(one), None) | (None, Some(one)) => one.to_string(),
            (None, None) => self.config.default_label.clone(),
        }
    }

    /// Full structured conclusion.
    pub fn render_structured(&self, almanac: &AlmanacSnapshot) -> HlResult<DayConclusion> {
        let label = self.label(almanac);

        let raw = resolve_raw_lists(almanac, self.config.catalog.as_ref())?;
        let (recommended, forbidden) = finalize(&raw.recommended, &raw.forbidden);

        let taboo = detect_hard_taboo(almanac);
        let graded = grade_day(almanac, taboo.is_some());
        let grade = apply_global_forbidden(graded, &forbidden);
        if grade != graded {
            tracing::debug!(date = %almanac.date, from = %graded, to = %grade, "诸事不宜 override");
        }

        let text = render(
            template_for(grade),
            &label,
            &recommended,
            &forbidden,
            grade,
            &self.config,
        );

        tracing::debug!(
            date = %almanac.date,
            %label,
            %grade,
            taboo = ?taboo,
            recommended = recommended.len(),
            forbidden = forbidden.len(),
            "rendered day conclusion"
        );

        Ok(DayConclusion {
            date: almanac.date,
            label,
            grade,
            recommended,
            forbidden,
            text,
            taboo,
        })
    }

    /// Narrative only.
    pub fn render_conclusion(&self, almanac: &AlmanacSnapshot) -> HlResult<String> {
        self.render_structured(almanac).map(|c| c.text)
    }

    /// Narrative with the ISO date line on top.
    pub fn render_dated(&self, almanac: &AlmanacSnapshot) -> HlResult<String> {
        self.render_structured(almanac).map(|c| c.dated_text())
    }
}

/// [`ConclusionRenderer::render_structured`] with the default config.
pub fn render_structured(almanac: &AlmanacSnapshot) -> HlResult<DayConclusion> {
    ConclusionRenderer::default().render_structured(almanac)
}

/// [`ConclusionRenderer::render_conclusion`] with the default config.
pub fn render_conclusion(almanac: &AlmanacSnapshot) -> HlResult<String> {
    ConclusionRenderer::default().render_conclusion(almanac)
}

/// [`ConclusionRenderer::render_dated`] with the default config.
pub fn render_dated(almanac: &AlmanacSnapshot) -> HlResult<String> {
    ConclusionRenderer::default().render_dated(almanac)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::activity::ALL_FORBIDDEN;
    use crate::error::HlError;

    fn on(y: i32, m: u32, d: u32) -> AlmanacSnapshot {
        AlmanacSnapshot::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn label_variants() {
        let r = ConclusionRenderer::default();
        let a = on(2024, 5, 20);
        assert_eq!(r.label(&a), "今日");
        assert_eq!(r.label(&a.clone().with_officer("建")), "建");
        assert_eq!(r.label(&a.clone().with_day_god("青龙")), "青龙");
        assert_eq!(
            r.label(&a.clone().with_officer("建").with_day_god("青龙")),
            "建日·青龙"
        );

        let r = ConclusionRenderer::new(RenderConfig::default().with_default_label("本日"));
        assert_eq!(r.label(&a), "本日");
    }

    #[test]
    fn great_day_at_ceiling() {
        let a = on(2024, 5, 20)
            .with_officer("建")
            .with_day_god("青龙")
            .with_level_name("从宜不从忌");
        let c = render_structured(&a).unwrap();
        assert_eq!(c.grade, Grade::GreatAuspicious);
        assert_eq!(c.label, "建日·青龙");
        assert!(c.taboo.is_none());
        assert!(c.text.starts_with("今日总评｜建日·青龙｜极佳\n"));
        assert_eq!(c.recommended.as_slice(), ["出行", "求职上任", "会友", "文书"]);
        assert_eq!(c.forbidden.as_slice(), ["动土修造", "开仓", "嫁娶"]);
    }

    #[test]
    fn eve_of_li_chun_is_extreme() {
        let a = on(2024, 2, 3)
            .with_officer("成")
            .with_level_name("从宜亦从忌")
            .with_solar_term("立春", 2, 4);
        let c = render_structured(&a).unwrap();
        assert_eq!(c.grade, Grade::ExtremeInauspicious);
        assert_eq!(c.taboo, Some(HardTaboo::FourAbsolute("立春".into())));
        assert!(c.text.starts_with("今日总评｜成｜特凶\n"));
        assert!(c.text.ends_with("结论：停一停，把时间让给复盘、校验与备选方案。"));
    }

    #[test]
    fn direct_lists_conflict_resolved() {
        let a = on(2024, 5, 20)
            .with_level_code(2)
            .with_activities(["签约", "签约", "搬家"], ["搬家"]);
        let c = render_structured(&a).unwrap();
        assert_eq!(c.recommended.as_slice(), ["签约"]);
        assert_eq!(c.forbidden.as_slice(), ["搬家"]);
        assert_eq!(c.grade, Grade::Neutral);
        assert!(c.text.contains("搬家等事项今日不建议推进；"));
        assert!(c.text.contains("签约等低风险的小决策正常推进；"));
    }

    #[test]
    fn global_forbidden_on_great_day() {
        let a = on(2024, 5, 20)
            .with_day_god("青龙")
            .with_level_name("从宜不从忌")
            .with_activities(["祭祀"], [ALL_FORBIDDEN, "动土", "出行"]);
        let c = render_structured(&a).unwrap();
        assert_eq!(c.grade, Grade::Inauspicious);
        assert!(c.forbidden.contains(ALL_FORBIDDEN));
        assert!(c.text.starts_with("今日总评｜青龙｜偏弱\n"));
        assert!(c.text.contains("\n避免重大决策。\n"));
        assert!(!c.text.contains(ALL_FORBIDDEN));
    }

    #[test]
    fn break_day_from_builtin_tables() {
        let a = on(2024, 5, 20)
            .with_officer("破")
            .with_day_god("明堂")
            .with_level_code(1);
        let c = render_structured(&a).unwrap();
        assert_eq!(c.grade, Grade::Inauspicious);
        assert!(c.text.contains("避免重大决策。"));
    }

    #[test]
    fn dated_output() {
        let a = on(2024, 3, 10).with_activities(["祭祀"], Vec::<&str>::new());
        let text = render_dated(&a).unwrap();
        let (date, body) = text.split_once('\n').unwrap();
        assert_eq!(date, "2024-03-10");
        assert_eq!(body, render_conclusion(&a).unwrap());
    }

    #[test]
    fn missing_officer_propagates() {
        let a = on(2024, 3, 10);
        assert!(matches!(
            render_conclusion(&a),
            Err(HlError::MissingOfficer)
        ));
    }

    #[test]
    fn custom_catalog_is_used() {
        let catalog = crate::catalog::Catalog::from_json(
            r#"{"officers":{"建":{"recommended":["x"],"forbidden":["y"]}},"categories":{"x":"甲","y":"乙"}}"#,
        )
        .unwrap();
        let r = ConclusionRenderer::new(RenderConfig::default().with_catalog(catalog));
        let c = r.render_structured(&on(2024, 3, 10).with_officer("建")).unwrap();
        assert_eq!(c.recommended.as_slice(), ["甲"]);
        assert_eq!(c.forbidden.as_slice(), ["乙"]);
    }

    #[test]
    fn serializes_for_consumers() {
        let a = on(2024, 1, 13).with_activities(["祭祀"], ["出行"]);
        let c = render_structured(&a).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["date"], "2024-01-13");
        assert_eq!(json["grade"], "特凶");
        assert_eq!(json["recommended"][0], "祭祀");
        assert!(json["taboo"].is_object());
    }

    fn labels() -> impl Strategy<Value = Vec<&'static str>> {
        prop::collection::vec(
            prop::sample::select(vec!["嫁娶", "出行", "动土", "祭祀", ALL_FORBIDDEN]),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn taboo_days_always_extreme(
            idx in 0usize..13,
            code in 0u8..4,
            god in prop::sample::select(vec!["青龙", "白虎", "天德", "玄武", ""]),
        ) {
            let md = crate::taboo::YANG_GONG_DATES[idx];
            let a = on(2025, md.month, md.day)
                .with_day_god(god)
                .with_level_code(code)
                .with_activities(["祭祀"], Vec::<&str>::new());
            let c = render_structured(&a).unwrap();
            prop_assert_eq!(c.grade, Grade::ExtremeInauspicious);
        }

        #[test]
        fn final_lists_never_overlap(yi in labels(), ji in labels(), code in 0u8..4) {
            let a = on(2024, 6, 15).with_level_code(code).with_activities(yi, ji);
            let c = render_structured(&a).unwrap();
            for item in c.recommended.iter() {
                prop_assert!(!c.forbidden.contains(item));
            }
            if c.forbidden.contains(ALL_FORBIDDEN) {
                prop_assert!(!c.grade.is_good());
            }
        }
    }
}

//! Fixed narrative text: one template per grade, and the sentence patterns
//! that fill its `{ji}` and `{yi}` slots.

use crate::grade::Grade;

/// Forbidden-sentence replacement when the day is globally off-limits.
pub const GLOBAL_FORBIDDEN_SENTENCE: &str = "避免重大决策。";

/// Recommended-sentence replacement when 诸事不宜 shows up among 宜.
pub const GLOBAL_RECOMMENDED_SENTENCE: &str = "没有特别适合的事项，保持日常活动即可。";

/// A sentence with an `{items}` form and an empty-list form.
#[derive(Debug, Clone, Copy)]
pub struct SentencePattern {
    /// Used when there are items; `{items}` is replaced by the joined list.
    pub filled: &'static str,
    /// Used when the list is empty.
    pub empty: &'static str,
}

/// The forbidden and recommended sentence patterns for one grade.
#[derive(Debug, Clone, Copy)]
pub struct GradePatterns {
    /// Pattern for the 忌 sentence.
    pub forbidden: SentencePattern,
    /// Pattern for the 宜 sentence.
    pub recommended: SentencePattern,
}

/// Narrative template for a grade. Placeholders: `{label}`, `{ji}`, `{yi}`.
pub fn template_for(grade: Grade) -> &'static str {
    match grade {
        Grade::ExtremeInauspicious => concat!(
            "今日总评｜{label}｜特凶\n",
            "今天天地气机强烈相冲、波动剧烈，外在秩序不稳，重大事项一律不建议推进；常规事务也应暂停或改期，仅保留信息收集、沟通对齐等准备动作。\n",
            "{ji}\n",
            "{yi}\n",
            "结论：停一停，把时间让给复盘、校验与备选方案。",
        ),
        Grade::GreatInauspicious => concat!(
            "今日总评｜{label}｜大凶\n",
            "今天天地能量逆风明显，适合整顿秩序、止损与充电：把时间投向文案打磨、合同复核、资产盘点、健康与家务整理，明天你会更快。\n",
            "{ji}\n",
            "{yi}\n",
            "建议：设定“三件小事清单”，完成它们，今天就是赢。",
        ),
        Grade::Inauspicious => concat!(
            "今日总评｜{label}｜偏弱\n",
            "今天天地能量偏弱但可控，更适合打磨与修正：聚焦复盘、校对、流程优化与小范围验证，为后续冲刺打地基。\n",
            "{ji}\n",
            "{yi}\n",
            "建议：用“小步快跑 + 及时复盘”拿几个小胜，稳定节奏、积累信心。",
        ),
        Grade::Neutral => concat!(
            "今日总评｜{label}｜中性\n",
            "今天天地能量趋于中性、行进状态平稳，日常常规事务按计划推进即可；遇到重大事项，无论好事或硬决策，建议再比对更佳日期，或先做准备性动作。\n",
            "{ji}\n",
            "{yi}涉及长期风险或大规划的决策，再观望。",
        ),
        Grade::Auspicious => concat!(
            "今日总评｜{label}｜良好\n",
            "今天天地能量顺畅度较好、配合度上行，整体利于推进关键节点，但仍需注意节奏与边界。\n",
            "{ji}\n",
            "{yi}体量较大或影响深远的动作，卡在当日相对吉时并完成文本复核。\n",
            "结论：把握窗口，该推进的推进，但保持留痕与风控。",
        ),
        Grade::GreatAuspicious => concat!(
            "今日总评｜{label}｜极佳\n",
            "今天天地气机顺和而有力、助推明显，是启动/定案/发布/签署的理想窗口；协同顺、效率高。\n",
            "{ji}\n",
            "{yi}\n",
            "结论：大胆而有序地推进，先做高收益事项，并配足复核与兜底。",
        ),
    }
}

const EXTREME_INAUSPICIOUS: GradePatterns = GradePatterns {
    forbidden: SentencePattern {
        filled: "{items}等事项建议绝对不要触碰；",
        empty: "暂无需要特别强调的忌项，但仍建议暂停一切关键推进；",
    },
    recommended: SentencePattern {
        filled: "{items}等宜项今天也不落地执行，仅作备案与预案推演。",
        empty: "今日无宜项，聚焦复盘、校验与备选方案。",
    },
};

const GREAT_INAUSPICIOUS: GradePatterns = GradePatterns {
    forbidden: SentencePattern {
        filled: "{items}等事项今天不建议触碰；",
        empty: "暂无明确忌项，但整体以整顿、止损与充电为主；",
    },
    recommended: SentencePattern {
        filled: "{items}保留在准备层面（对齐方案、确认需求、下单但不落地）。",
        empty: "暂无宜项，专注于整顿秩序、盘点资产与补课。",
    },
};

const INAUSPICIOUS: GradePatterns = GradePatterns {
    forbidden: SentencePattern {
        filled: "{items}等事项今天先不推进；",
        empty: "暂无特别忌项，但建议先聚焦复盘、校对与修正；",
    },
    recommended: SentencePattern {
        filled: "{items}等低风险、可回退的小决策与“补课型”任务优先安排；",
        empty: "暂无宜项，聚焦小步快跑与及时复盘。",
    },
};

/// Also the fallback for a grade without its own patterns.
pub const NEUTRAL: GradePatterns = GradePatterns {
    forbidden: SentencePattern {
        filled: "{items}等事项今日不建议推进；",
        empty: "暂无需特别规避的事项，可按计划推进常规事务；",
    },
    recommended: SentencePattern {
        filled: "{items}等低风险的小决策正常推进；",
        empty: "暂无明确宜项，可按计划推进常规事务；",
    },
};

const AUSPICIOUS: GradePatterns = GradePatterns {
    forbidden: SentencePattern {
        filled: "{items}等事项能避则避；",
        empty: "暂无需要规避的事项，但仍注意节奏与边界；",
    },
    recommended: SentencePattern {
        filled: "{items}等事项优先处理签署/交付/安置/修缮/对外发布等可控动作；",
        empty: "暂无特别宜项，但可推进关键节点，保持节奏与留痕；",
    },
};

const GREAT_AUSPICIOUS: GradePatterns = GradePatterns {
    forbidden: SentencePattern {
        filled: "{items}如有冲突，先择时或另日；",
        empty: "暂无明显忌项，可因势利导；",
    },
    recommended: SentencePattern {
        filled: "{items}等事项可作为当日主线优先落地，集中完成关键里程碑；",
        empty: "暂无宜项，但整体利于推进关键里程碑，可综合评估后执行；",
    },
};

/// Sentence patterns registered per grade.
pub static SENTENCE_PATTERNS: [(Grade, GradePatterns); 6] = [
    (Grade::ExtremeInauspicious, EXTREME_INAUSPICIOUS),
    (Grade::GreatInauspicious, GREAT_INAUSPICIOUS),
    (Grade::Inauspicious, INAUSPICIOUS),
    (Grade::Neutral, NEUTRAL),
    (Grade::Auspicious, AUSPICIOUS),
    (Grade::GreatAuspicious, GREAT_AUSPICIOUS),
];

/// Sentence patterns for a grade, falling back to the neutral set.
pub fn patterns_for(grade: Grade) -> &'static GradePatterns {
    SENTENCE_PATTERNS
        .iter()
        .find(|(g, _)| *g == grade)
        .map_or(&NEUTRAL, |(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_all_placeholders() {
        for grade in Grade::all() {
            let t = template_for(*grade);
            for slot in ["{label}", "{ji}", "{yi}"] {
                assert!(t.contains(slot), "{grade} template lacks {slot}");
            }
        }
    }

    #[test]
    fn templates_name_their_grade() {
        assert!(template_for(Grade::ExtremeInauspicious).contains("｜特凶"));
        assert!(template_for(Grade::Neutral).contains("｜中性"));
        assert!(template_for(Grade::GreatAuspicious).contains("｜极佳"));
    }

    #[test]
    fn every_grade_has_patterns() {
        for grade in Grade::all() {
            assert!(SENTENCE_PATTERNS.iter().any(|(g, _)| g == grade));
        }
    }

    #[test]
    fn filled_patterns_take_items() {
        for (_, p) in SENTENCE_PATTERNS.iter() {
            assert!(p.forbidden.filled.contains("{items}"));
            assert!(p.recommended.filled.contains("{items}"));
            assert!(!p.forbidden.empty.contains("{items}"));
            assert!(!p.recommended.empty.contains("{items}"));
        }
    }

    #[test]
    fn lookup_by_grade() {
        assert_eq!(
            patterns_for(Grade::Auspicious).forbidden.filled,
            "{items}等事项能避则避；"
        );
    }
}

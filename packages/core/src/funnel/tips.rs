//! Rule-based improvement tips
//!
//! Each [`TipRule`] is evaluated independently against a [`TipContext`];
//! every matching rule contributes one tip. The final list is ordered by
//! priority, highest first, keeping rule order among equal priorities.

use std::cmp::Reverse;
use std::fmt;

use tracing::debug;

use crate::funnel::{
    format::format_locale,
    types::{CampaignInputs, FunnelResult, Priority, Rating, Tip, TipCategory, TipType},
};

/// Values a rule predicate can inspect
#[derive(Debug, Clone, Copy)]
pub struct TipContext<'a> {
    pub result: &'a FunnelResult,
    pub inputs: &'a CampaignInputs,
}

/// One declarative tip rule.
///
/// `message` may contain the placeholder `{cost_per_lead}`.
#[derive(Clone)]
pub struct TipRule {
    pub id: &'static str,
    pub predicate: fn(&TipContext<'_>) -> bool,
    pub tip_type: TipType,
    pub category: TipCategory,
    pub priority: Priority,
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
    pub impact: Option<&'static str>,
}

impl fmt::Debug for TipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TipRule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl TipRule {
    pub fn matches(&self, ctx: &TipContext<'_>) -> bool {
        (self.predicate)(ctx)
    }

    pub fn render(&self, ctx: &TipContext<'_>) -> Tip {
        let message = self
            .message
            .replace("{cost_per_lead}", &format_locale(ctx.result.cost_per_lead as f64));

        Tip {
            tip_type: self.tip_type,
            category: self.category,
            title: self.title.to_string(),
            message,
            action: self.action.to_string(),
            priority: self.priority,
            impact: self.impact.map(str::to_string),
        }
    }
}

/// The rule table for the Costa Rica market, in evaluation order.
pub fn default_rules() -> Vec<TipRule> {
    vec![
        TipRule {
            id: "low_conversion",
            predicate: |ctx| ctx.inputs.conversion_rate < 3.0,
            tip_type: TipType::Warning,
            category: TipCategory::Conversion,
            priority: Priority::High,
            title: "Conversión Baja",
            message: "Tu tasa de conversión está por debajo del promedio costarricense (4.2%)",
            action: "Optimiza tu landing page con testimonios locales y formularios cortos",
            impact: Some("Alto - Puede duplicar tus leads"),
        },
        TipRule {
            id: "high_cost_per_lead",
            predicate: |ctx| ctx.result.cost_per_lead > 15_000,
            tip_type: TipType::Info,
            category: TipCategory::Cost,
            priority: Priority::Medium,
            title: "Costo por Lead Alto",
            message: "₡{cost_per_lead} por lead está sobre el promedio CR (₡12,000)",
            action: "Segmenta por provincia o ajusta palabras clave negativas",
            impact: Some("Medio - Reduce costos 20-30%"),
        },
        TipRule {
            id: "limited_budget",
            predicate: |ctx| ctx.inputs.investment < 100_000.0,
            tip_type: TipType::Suggestion,
            category: TipCategory::Budget,
            priority: Priority::Medium,
            title: "Presupuesto Limitado",
            message: "Con presupuestos menores a ₡100,000 es difícil competir en mercados amplios",
            action: "Enfócate en nichos específicos o audiencias locales muy segmentadas",
            impact: Some("Medio - Mejor eficiencia del presupuesto"),
        },
        TipRule {
            id: "low_click_rate",
            predicate: |ctx| ctx.inputs.click_rate < 2.0,
            tip_type: TipType::Warning,
            category: TipCategory::Traffic,
            priority: Priority::High,
            title: "CTR Bajo",
            message: "Tus anuncios no están generando suficiente interés",
            action: "Prueba anuncios con referencias culturales ticas o promociones limitadas",
            impact: Some("Alto - Más tráfico con mismo presupuesto"),
        },
        TipRule {
            id: "low_roi",
            predicate: |ctx| ctx.result.roi < 100,
            tip_type: TipType::Warning,
            category: TipCategory::Roi,
            priority: Priority::High,
            title: "ROI Bajo",
            message: "Tu retorno de inversión está por debajo del 100%",
            action: "Revisa tu propuesta de valor y precios para el mercado costarricense",
            impact: Some("Crítico - Rentabilidad del negocio"),
        },
        TipRule {
            id: "excellent_performance",
            predicate: |ctx| ctx.result.performance.overall == Rating::Excellent,
            tip_type: TipType::Success,
            category: TipCategory::Optimization,
            priority: Priority::Low,
            title: "¡Excelente Rendimiento!",
            message: "Tus métricas están por encima del promedio costarricense",
            action: "Considera aumentar presupuesto para escalar estos resultados",
            impact: Some("Alto - Oportunidad de crecimiento"),
        },
        TipRule {
            id: "market_whatsapp",
            predicate: |ctx| ctx.result.leads > 0,
            tip_type: TipType::Info,
            category: TipCategory::Market,
            priority: Priority::Low,
            title: "Tip Mercado CR",
            message: "En Costa Rica, WhatsApp Business tiene 40% más conversión que email",
            action: "Integra WhatsApp en tu estrategia de seguimiento de leads",
            impact: Some("Medio - Mejor conversión de leads"),
        },
    ]
}

/// Evaluates a rule table against funnel results
#[derive(Debug, Clone)]
pub struct TipGenerator {
    rules: Vec<TipRule>,
}

impl TipGenerator {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    pub fn with_rules(rules: Vec<TipRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TipRule] {
        &self.rules
    }

    /// Tips for a result, highest priority first. `None` yields no tips.
    pub fn generate(&self, result: Option<&FunnelResult>, inputs: &CampaignInputs) -> Vec<Tip> {
        let Some(result) = result else {
            return Vec::new();
        };
        let ctx = TipContext { result, inputs };

        let mut tips: Vec<Tip> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&ctx))
            .map(|rule| rule.render(&ctx))
            .collect();

        // Stable sort: rule order survives among equal priorities.
        tips.sort_by_key(|tip| Reverse(tip.priority.weight()));

        debug!(count = tips.len(), "Tips generated");
        tips
    }
}

impl Default for TipGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate tips with the default rule table.
pub fn generate_tips(result: Option<&FunnelResult>, inputs: &CampaignInputs) -> Vec<Tip> {
    TipGenerator::new().generate(result, inputs)
}

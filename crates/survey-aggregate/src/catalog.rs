//! Dashboard pages described as data.
//!
//! Each page lists its charts with the field they count and the order their
//! rows are shown in. Building a page runs every chart over the same
//! response subset.

use serde::Serialize;
use tracing::debug;

use survey_model::ordering::{
    AGE_ORDER, LOCATION_ORDER, NO_CHILDREN_LABEL, PURCHASE_ORDER, RENT_ORDER, SATISFACTION_ORDER,
};
use survey_model::{
    ChartOrder, ChartRow, FieldRef, Response, Result, SortMode, SurveySchema, fields,
};

use crate::choice::field_chart_rows;
use crate::format::apply_sort_mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub field: FieldRef,
    /// Order used when the user has not picked one.
    pub order: ChartOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub name: &'static str,
    pub slug: &'static str,
    pub charts: &'static [ChartSpec],
}

impl Page {
    pub fn chart(&self, id: &str) -> Option<&'static ChartSpec> {
        self.charts.iter().find(|chart| chart.id == id)
    }
}

const fn chart(
    id: &'static str,
    title: &'static str,
    field: FieldRef,
    order: ChartOrder,
) -> ChartSpec {
    ChartSpec {
        id,
        title,
        field,
        order,
    }
}

const DEMOGRAPHICS: &[ChartSpec] = &[
    chart("chart-age", "Aldersfordeling", fields::AGE, ChartOrder::Custom(AGE_ORDER)),
    chart("chart-gender", "Kjønnsfordeling", fields::GENDER, ChartOrder::Input),
    chart("chart-household", "Husstandstype", fields::HOUSEHOLD, ChartOrder::Popularity),
    chart(
        "chart-lifesituation",
        "Livssituasjon",
        fields::LIFE_SITUATION,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-children",
        "Antall barn i husstanden",
        fields::CHILDREN,
        ChartOrder::LeadingNumber {
            zero_label: Some(NO_CHILDREN_LABEL),
        },
    ),
    chart("chart-sector", "Hvilken sektor jobber du i?", fields::SECTOR, ChartOrder::Popularity),
    chart(
        "chart-recruitment",
        "Bolig som rekrutteringsutfordring",
        fields::RECRUITMENT_CHALLENGE,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-move-to-rendalen",
        "Ville du flyttet til Rendalen?",
        fields::WOULD_MOVE_HERE,
        ChartOrder::Popularity,
    ),
];

const HOUSING: &[ChartSpec] = &[
    chart("chart-ownership", "Eier eller leier", fields::OWNERSHIP, ChartOrder::Popularity),
    chart("chart-dwelling-type", "Type bosted", fields::DWELLING_TYPE, ChartOrder::Popularity),
    chart(
        "chart-satisfaction",
        "Tilfredshet med bosituasjon",
        fields::SATISFACTION,
        ChartOrder::Custom(SATISFACTION_ORDER),
    ),
    chart(
        "chart-registered",
        "Bostedsadresse registrert",
        fields::REGISTERED_ADDRESS,
        ChartOrder::Input,
    ),
    chart(
        "chart-location",
        "Geografisk fordeling",
        fields::LOCATION,
        ChartOrder::Custom(LOCATION_ORDER),
    ),
    chart(
        "chart-missing",
        "Hva savnes i området?",
        fields::MISSING_IN_AREA,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-regulate-plots",
        "Ønske om å regulere tomter",
        fields::REGULATE_PLOTS,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-looking-for-plot",
        "Aktivt på utkikk etter tomt",
        fields::LOOKING_FOR_PLOT,
        ChartOrder::Popularity,
    ),
    chart("chart-plot-type", "Type tomt du ser etter", fields::PLOT_TYPE, ChartOrder::Popularity),
];

const MOVING: &[ChartSpec] = &[
    chart("chart-moving-plans", "Flytteplaner", fields::MOVING_PLANS, ChartOrder::Popularity),
    chart(
        "chart-destinations",
        "Hvor kunne du tenke deg å bo?",
        fields::DESTINATIONS,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-preferred-dwelling",
        "Ønsket boligtype",
        fields::PREFERRED_DWELLING,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-bedrooms",
        "Behov for soverom",
        fields::BEDROOMS,
        ChartOrder::LeadingNumber { zero_label: None },
    ),
    chart(
        "chart-neighbourhood",
        "Viktige nærmiljøkvaliteter",
        fields::NEIGHBOURHOOD_QUALITIES,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-housing-qualities",
        "Viktige bokvaliteter",
        fields::HOUSING_QUALITIES,
        ChartOrder::Popularity,
    ),
    chart("chart-barriers", "Største hindringer", fields::BARRIERS, ChartOrder::Popularity),
    chart(
        "chart-adaptations",
        "Nødvendige tilpasninger",
        fields::ADAPTATIONS,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-shared-facilities",
        "Relevante fellesløsninger",
        fields::SHARED_FACILITIES,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-extra-services",
        "Tjenester du ville betalt for",
        fields::EXTRA_SERVICES,
        ChartOrder::Popularity,
    ),
];

const ECONOMY: &[ChartSpec] = &[
    chart(
        "chart-purchase",
        "Maksimal kjøpesum/byggekostnad",
        fields::PURCHASE_CAPACITY,
        ChartOrder::Custom(PURCHASE_ORDER),
    ),
    chart(
        "chart-rent",
        "Månedlig leiekapasitet",
        fields::RENT_CAPACITY,
        ChartOrder::Custom(RENT_ORDER),
    ),
    chart(
        "chart-housing-allowance",
        "Kjennskap til bostøtte",
        fields::HOUSING_ALLOWANCE,
        ChartOrder::Popularity,
    ),
    chart(
        "chart-starter-loan",
        "Kjennskap til startlån",
        fields::STARTER_LOAN,
        ChartOrder::Popularity,
    ),
];

pub const PAGES: &[Page] = &[
    Page {
        name: "Demografi",
        slug: "demografi",
        charts: DEMOGRAPHICS,
    },
    Page {
        name: "Bolig",
        slug: "bolig",
        charts: HOUSING,
    },
    Page {
        name: "Flytting",
        slug: "flytting",
        charts: MOVING,
    },
    Page {
        name: "Økonomi",
        slug: "okonomi",
        charts: ECONOMY,
    },
];

/// Look a page up by slug or display name, ignoring case.
pub fn page(name: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| {
        page.slug.eq_ignore_ascii_case(name) || page.name.to_lowercase() == name.to_lowercase()
    })
}

/// Find the chart with the given id on any page.
pub fn find_chart(id: &str) -> Option<&'static ChartSpec> {
    PAGES.iter().find_map(|page| page.chart(id))
}

/// Rows of one chart, ready to plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub rows: Vec<ChartRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    pub name: String,
    pub total_responses: usize,
    pub charts: Vec<ChartData>,
}

pub fn build_chart(
    responses: &[&Response],
    schema: &SurveySchema,
    chart: &ChartSpec,
    mode: SortMode,
) -> Result<ChartData> {
    let mut rows = field_chart_rows(
        responses.iter().copied(),
        schema,
        chart.field.category,
        chart.field.key,
    )?;
    apply_sort_mode(&mut rows, mode, chart.order);
    Ok(ChartData {
        id: chart.id.to_string(),
        title: chart.title.to_string(),
        rows,
    })
}

/// Every chart of `page` in its natural order, over the same responses.
pub fn build_page(responses: &[&Response], schema: &SurveySchema, page: &Page) -> Result<PageData> {
    let charts = page
        .charts
        .iter()
        .map(|chart| build_chart(responses, schema, chart, SortMode::Natural))
        .collect::<Result<Vec<_>>>()?;
    debug!(page = page.name, charts = charts.len(), responses = responses.len(), "built page");
    Ok(PageData {
        name: page.name.to_string(),
        total_responses: responses.len(),
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_field_is_aggregatable() {
        let schema = SurveySchema::housing_survey();
        for page in PAGES {
            for chart in page.charts {
                let spec = schema
                    .field_ref(chart.field)
                    .unwrap_or_else(|error| panic!("{}: {error}", chart.id));
                assert!(spec.kind.is_aggregatable(), "{} is not chartable", chart.id);
            }
        }
    }

    #[test]
    fn chart_ids_are_unique() {
        let mut ids: Vec<&str> = PAGES
            .iter()
            .flat_map(|page| page.charts.iter().map(|chart| chart.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn pages_resolve_by_slug_or_name() {
        assert_eq!(page("okonomi").map(|page| page.name), Some("Økonomi"));
        assert_eq!(page("Økonomi").map(|page| page.slug), Some("okonomi"));
        assert_eq!(page("BOLIG").map(|page| page.slug), Some("bolig"));
        assert!(page("innspill").is_none());
        assert!(find_chart("chart-bedrooms").is_some());
    }

    #[test]
    fn page_charts_share_the_subset() {
        let schema = SurveySchema::housing_survey();
        let responses = [
            Response::new(1)
                .with_answer(fields::AGE, Some("30-39 år"))
                .with_answer(fields::CHILDREN, Some("2")),
            Response::new(2)
                .with_answer(fields::AGE, Some("20-29 år"))
                .with_answer(fields::CHILDREN, Some("Ingen")),
        ];
        let subset: Vec<&Response> = responses.iter().collect();
        let data = build_page(&subset, &schema, &PAGES[0]).unwrap();

        assert_eq!(data.total_responses, 2);
        let age = &data.charts[0];
        let labels: Vec<&str> = age.rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["20-29 år", "30-39 år"]);
        let children = data.charts.iter().find(|chart| chart.id == "chart-children").unwrap();
        assert_eq!(children.rows[0].label, "Ingen");
        assert_eq!(children.rows[0].percent, 50.0);
    }
}

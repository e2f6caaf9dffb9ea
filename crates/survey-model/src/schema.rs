//! Explicit questionnaire schema.
//!
//! Every (category, field) pair the dashboard knows about is listed here with
//! the kind of value it holds. Aggregation dispatches on [`ValueKind`] instead
//! of guessing from field names, and lookups of unknown pairs fail loudly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SurveyError};

/// Kind of value stored in a questionnaire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// One selected option per response.
    Scalar,
    /// Options packed into one `;`-joined string.
    MultiChoice,
    /// Open text, identifiers and timestamps. Not aggregatable.
    FreeText,
}

impl ValueKind {
    pub fn is_aggregatable(self) -> bool {
        !matches!(self, ValueKind::FreeText)
    }
}

/// A statically known (category, field) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldRef {
    pub category: &'static str,
    pub key: &'static str,
}

impl FieldRef {
    pub const fn new(category: &'static str, key: &'static str) -> Self {
        Self { category, key }
    }
}

/// Schema entry for one questionnaire field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub category: String,
    pub key: String,
    /// Short display title.
    pub label: String,
    pub kind: ValueKind,
}

impl FieldSpec {
    pub fn new(
        category: impl Into<String>,
        key: impl Into<String>,
        label: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            category: category.into(),
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Field name fragments the questionnaire tool appends to multi-choice questions.
///
/// Keys are truncated at 100 characters, so `flere_svar_mulig` sometimes
/// survives only as `flere_svar_mul`.
const MULTI_CHOICE_NAME_MARKERS: [&str; 2] = ["flere_valg_mulig", "flere_svar_mul"];

/// Returns true when the field name carries the tool's multi-choice marker.
///
/// Only used to cross-check the schema. Several multi-choice questions lack
/// the marker, so this must never decide how a field is counted.
pub fn is_multi_select_field_name(key: &str) -> bool {
    MULTI_CHOICE_NAME_MARKERS
        .iter()
        .any(|marker| key.contains(marker))
}

/// Typed mapping from (category, field) to [`FieldSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveySchema {
    categories: BTreeMap<String, BTreeMap<String, FieldSpec>>,
}

impl SurveySchema {
    /// Build a schema, rejecting duplicate pairs and multi-choice markers on
    /// fields not declared as multi-choice.
    pub fn new<I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = FieldSpec>,
    {
        let mut schema = Self::default();
        for spec in fields {
            if spec.category.trim().is_empty() || spec.key.trim().is_empty() {
                return Err(SurveyError::InvalidSchema(
                    "category and key must be non-empty".to_string(),
                ));
            }
            if is_multi_select_field_name(&spec.key) && spec.kind != ValueKind::MultiChoice {
                return Err(SurveyError::InvalidSchema(format!(
                    "{}.{} is named as multi-choice but declared {:?}",
                    spec.category, spec.key, spec.kind
                )));
            }
            let fields = schema.categories.entry(spec.category.clone()).or_default();
            if fields.contains_key(&spec.key) {
                return Err(SurveyError::InvalidSchema(format!(
                    "duplicate field {}.{}",
                    spec.category, spec.key
                )));
            }
            fields.insert(spec.key.clone(), spec);
        }
        Ok(schema)
    }

    /// The questionnaire used by the housing needs survey.
    pub fn housing_survey() -> Self {
        let mut categories: BTreeMap<String, BTreeMap<String, FieldSpec>> = BTreeMap::new();
        for (category, key, label, kind) in HOUSING_SURVEY_FIELDS {
            categories
                .entry((*category).to_string())
                .or_default()
                .insert(
                    (*key).to_string(),
                    FieldSpec::new(*category, *key, *label, *kind),
                );
        }
        Self { categories }
    }

    /// Look up a field, failing on unknown category or key.
    pub fn field(&self, category: &str, key: &str) -> Result<&FieldSpec> {
        let fields = self
            .categories
            .get(category)
            .ok_or_else(|| SurveyError::UnknownCategory {
                category: category.to_string(),
            })?;
        fields.get(key).ok_or_else(|| SurveyError::UnknownField {
            category: category.to_string(),
            field: key.to_string(),
        })
    }

    pub fn field_ref(&self, field: FieldRef) -> Result<&FieldSpec> {
        self.field(field.category, field.key)
    }

    pub fn contains(&self, category: &str, key: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|fields| fields.contains_key(key))
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.categories.values().flat_map(BTreeMap::values)
    }

    pub fn fields_in(&self, category: &str) -> Result<impl Iterator<Item = &FieldSpec>> {
        let fields = self
            .categories
            .get(category)
            .ok_or_else(|| SurveyError::UnknownCategory {
                category: category.to_string(),
            })?;
        Ok(fields.values())
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Well-known fields referenced by filters, text extraction and export.
pub mod fields {
    use super::FieldRef;

    pub const START_TIME: FieldRef = FieldRef::new("metadata", "starttidspunkt");
    pub const COMPLETION_TIME: FieldRef = FieldRef::new("metadata", "fullføringstidspunkt");
    pub const POLICY_FEEDBACK: FieldRef = FieldRef::new(
        "metadata",
        "har_du_andre_innspill_til_kommunens_arbeid_med_boligpolitikk_boligtilbud_eller_tomteutvikling",
    );

    pub const AGE: FieldRef = FieldRef::new("demografi", "hva_er_din_alder");
    pub const GENDER: FieldRef = FieldRef::new("demografi", "kjønn");
    pub const HOUSEHOLD: FieldRef = FieldRef::new("demografi", "hvordan_ser_din_husstand_ut");
    pub const CHILDREN: FieldRef = FieldRef::new("demografi", "hvor_mange_barn_bor_i_din_husstand");
    pub const LIFE_SITUATION: FieldRef = FieldRef::new("demografi", "hva_er_din_livssituasjon");

    pub const REGISTERED_ADDRESS: FieldRef = FieldRef::new(
        "navaerende_bolig",
        "har_du_registrert_bostedsadresse_i_rendalen_kommune_i_dag",
    );
    pub const SATISFACTION: FieldRef = FieldRef::new(
        "navaerende_bolig",
        "hvor_fornøyd_er_du_med_din_nåværende_bosituasjon",
    );
    pub const OWNERSHIP: FieldRef =
        FieldRef::new("navaerende_bolig", "eier_eller_leier_du_boligen_du_bor_i");
    pub const RENT_CAPACITY: FieldRef = FieldRef::new(
        "navaerende_bolig",
        "dersom_du_skulle_leie_bolig_hva_har_du_mulighet_til_å_betale_i_månedsleie",
    );

    pub const MISSING_IN_AREA: FieldRef = FieldRef::new(
        "omrade_kvalitet",
        "er_det_noe_du_savner_i_området_du_bor_flere_valg_mulig",
    );

    pub const SECTOR: FieldRef = FieldRef::new("arbeid", "hvilken_sektor_jobber_du_i");
    pub const RECRUITMENT_CHALLENGE: FieldRef = FieldRef::new(
        "arbeid",
        "i_hvilken_grad_mener_du_at_mangel_på_passende_boliger_er_en_utfordring_for_å_rekruttere_eller_behold",
    );
    pub const WOULD_MOVE_HERE: FieldRef = FieldRef::new(
        "arbeid",
        "kunne_du_vurdert_å_flytte_til_rendalen_dersom_en_passende_bolig_og_relevant_jobb_var_tilgjengelig",
    );

    pub const DWELLING_TYPE: FieldRef = FieldRef::new("diverse", "hva_slags_type_bosted_har_du_nå");
    pub const LOCATION: FieldRef = FieldRef::new("diverse", "hvor_i_rendalen_kommune_bor_du");

    pub const REGULATE_PLOTS: FieldRef = FieldRef::new(
        "tomt_og_eiendom",
        "vurderer_eller_ønsker_dudere_å_regulere_tomter_for_å_bygge",
    );
    pub const LOOKING_FOR_PLOT: FieldRef = FieldRef::new(
        "tomt_og_eiendom",
        "er_dudere_aktivt_på_utkikk_etter_boligtomt_i_kommunen",
    );
    pub const PLOT_TYPE: FieldRef = FieldRef::new(
        "tomt_og_eiendom",
        "hva_slags_type_tomt_ser_dudere_primært_etter",
    );
    pub const PLOT_REASON: FieldRef = FieldRef::new(
        "tomt_og_eiendom",
        "hvis_du_har_vurdert_å_skille_ut_tomt_hva_er_den_viktigste_årsaken_til_at_det_ikke_har_blitt_gjort",
    );

    pub const MOVING_PLANS: FieldRef =
        FieldRef::new("flytteplaner", "har_du_planer_om_å_flytte_på_deg");
    pub const DESTINATIONS: FieldRef = FieldRef::new(
        "flytteplaner",
        "hvor_kunne_du_tenke_deg_å_bo_hvis_du_skulle_flytte_til_eller_innad_i_rendalen_kommune_flere_svar_mul",
    );

    pub const NEIGHBOURHOOD_QUALITIES: FieldRef = FieldRef::new(
        "boligpreferanser",
        "hvilke_nærmiljøkvaliteter_er_viktigst_for_deg_ved_valg_av_sted_å_bo_flere_valg_mulig",
    );
    pub const PREFERRED_DWELLING: FieldRef = FieldRef::new(
        "boligpreferanser",
        "hvilken_boligtype_er_mest_aktuell_for_deg_ved_en_flytting_flere_svar_mulig",
    );
    pub const HOUSING_QUALITIES: FieldRef = FieldRef::new(
        "boligpreferanser",
        "hvilke_bokvaliteter_er_viktigst_for_deg_ved_valg_av_ny_bolig_flere_valg_mulig",
    );
    pub const BEDROOMS: FieldRef =
        FieldRef::new("boligpreferanser", "hvor_mange_soverom_har_du_behov_for");

    pub const ADAPTATIONS: FieldRef = FieldRef::new(
        "tilgjengelighet_helse",
        "hva_må_tilpasses_eller_oppgraderes_dersom_dudere_skal_bo_lengst_mulig_i_egen_bolig_eller_fikk_reduse",
    );
    pub const SHARED_FACILITIES: FieldRef = FieldRef::new(
        "bofellesskap",
        "dersom_det_tilbys_boliger_med_mulighet_for_fellesløsninger_hvilke_tilbud_kunne_vært_relevant_for_deg",
    );
    pub const EXTRA_SERVICES: FieldRef = FieldRef::new(
        "tilleggstjenester",
        "hvilke_tjenester_kunne_du_tenke_deg_å_betale_ekstra_for_enten_direkte_eller_som_del_av_en_felleskost",
    );
    pub const BARRIERS: FieldRef = FieldRef::new(
        "hindringer_og_innspill",
        "for_å_realisere_dine_boligønsker_hva_blir_dine_største_hindringer_flere_svar_mulig",
    );

    pub const PURCHASE_CAPACITY: FieldRef = FieldRef::new(
        "okonomi",
        "dersom_du_skulle_kjøpe_bolig_hva_er_din_anslåtte_maksimale_kjøpesumbyggekostnad",
    );
    pub const HOUSING_ALLOWANCE: FieldRef = FieldRef::new(
        "okonomi",
        "bostøtte_er_en_statlig_støtteordning_for_de_med_lave_inntekter_og_høye_boutgifter_hvilken_av_disse_p",
    );
    pub const STARTER_LOAN: FieldRef = FieldRef::new(
        "okonomi",
        "startlån_er_en_statlig_låneordning_for_alle_aldre_for_de_som_ikke_får_lån_i_ordinær_bank_hvilken_av_",
    );
}

use ValueKind::{FreeText, MultiChoice, Scalar};

const HOUSING_SURVEY_FIELDS: &[(&str, &str, &str, ValueKind)] = &[
    ("metadata", "id", "ID", FreeText),
    ("metadata", "starttidspunkt", "Starttidspunkt", FreeText),
    ("metadata", "fullføringstidspunkt", "Fullføringstidspunkt", FreeText),
    ("metadata", "e_postadresse", "E-postadresse", FreeText),
    ("metadata", "navn", "Navn", FreeText),
    ("metadata", "tidspunkt_for_siste_endring", "Sist endret", FreeText),
    (
        "metadata",
        "hvor_er_din_nåværende_eller_fremtidige_arbeidsplass_hvis_du_søker_arbeid",
        "Arbeidsplass",
        Scalar,
    ),
    (
        "metadata",
        "med_tanke_på_fremtidige_behov_knyttet_til_alder_eller_redusert_helse_hva_er_det_mest_aktuelle_altern",
        "Fremtidig boalternativ",
        Scalar,
    ),
    (
        "metadata",
        "er_det_noen_andre_ting_som_er_viktige_for_deg_ved_valg_av_fremtidig_bosted",
        "Andre viktige forhold",
        FreeText,
    ),
    (
        fields::POLICY_FEEDBACK.category,
        fields::POLICY_FEEDBACK.key,
        "Innspill til boligpolitikk",
        FreeText,
    ),
    (fields::AGE.category, fields::AGE.key, "Alder", Scalar),
    (fields::GENDER.category, fields::GENDER.key, "Kjønn", Scalar),
    (fields::HOUSEHOLD.category, fields::HOUSEHOLD.key, "Husstandstype", Scalar),
    (fields::CHILDREN.category, fields::CHILDREN.key, "Antall barn", Scalar),
    (fields::LIFE_SITUATION.category, fields::LIFE_SITUATION.key, "Livssituasjon", Scalar),
    (
        "demografi",
        "hvilke_aldersgrupper_ønsker_du_å_dele_slike_funksjoner_med",
        "Aldersgrupper i fellesskap",
        Scalar,
    ),
    (
        fields::REGISTERED_ADDRESS.category,
        fields::REGISTERED_ADDRESS.key,
        "Bostedsadresse registrert",
        Scalar,
    ),
    (fields::SATISFACTION.category, fields::SATISFACTION.key, "Tilfredshet", Scalar),
    (fields::OWNERSHIP.category, fields::OWNERSHIP.key, "Eier eller leier", Scalar),
    (
        "navaerende_bolig",
        "hva_betaler_du_i_månedsleie_for_din_bolig",
        "Nåværende månedsleie",
        Scalar,
    ),
    (
        "navaerende_bolig",
        "leier_du_boligen_din_privat_eller_kommunalt",
        "Privat eller kommunal leie",
        Scalar,
    ),
    (
        "navaerende_bolig",
        "eier_du_andre_boliger_husmannsplasser_gårdsbruk_som_ikke_lenger_er_i_bruk_og_som_er_ønskelig_å_avhen",
        "Ubrukte boliger",
        Scalar,
    ),
    (
        "navaerende_bolig",
        "eier_dudere_grunn_i_kommunen_hvor_det_kan_være_aktuelt_å_skille_ut_tomt",
        "Eier grunn",
        Scalar,
    ),
    (fields::RENT_CAPACITY.category, fields::RENT_CAPACITY.key, "Leiekapasitet", Scalar),
    (fields::MISSING_IN_AREA.category, fields::MISSING_IN_AREA.key, "Hva savnes", MultiChoice),
    (fields::SECTOR.category, fields::SECTOR.key, "Sektor", Scalar),
    (
        fields::RECRUITMENT_CHALLENGE.category,
        fields::RECRUITMENT_CHALLENGE.key,
        "Bolig som rekrutteringsutfordring",
        Scalar,
    ),
    (
        fields::WOULD_MOVE_HERE.category,
        fields::WOULD_MOVE_HERE.key,
        "Ville flyttet til Rendalen",
        Scalar,
    ),
    (fields::DWELLING_TYPE.category, fields::DWELLING_TYPE.key, "Type bosted", Scalar),
    (fields::LOCATION.category, fields::LOCATION.key, "Område", Scalar),
    (fields::REGULATE_PLOTS.category, fields::REGULATE_PLOTS.key, "Regulere tomter", Scalar),
    (fields::LOOKING_FOR_PLOT.category, fields::LOOKING_FOR_PLOT.key, "Ser etter tomt", Scalar),
    (fields::PLOT_TYPE.category, fields::PLOT_TYPE.key, "Type tomt", Scalar),
    (
        fields::PLOT_REASON.category,
        fields::PLOT_REASON.key,
        "Årsak til at tomt ikke er skilt ut",
        FreeText,
    ),
    (
        "tomt_og_eiendom",
        "hva_kunne_fått_deg_til_å_realisere_utskillingregulering_av_tomter_på_din_eiendom",
        "Hva kan utløse utskilling",
        Scalar,
    ),
    (fields::MOVING_PLANS.category, fields::MOVING_PLANS.key, "Flytteplaner", Scalar),
    (fields::DESTINATIONS.category, fields::DESTINATIONS.key, "Destinasjoner", MultiChoice),
    (
        "flytteplaner",
        "hvor_langt_er_du_villig_til_å_flytte_på_deg_for_å_bo_i_en_tilpasset_bolig",
        "Flytteavstand",
        Scalar,
    ),
    (
        "flytteplaner",
        "dersom_tilpasninger_ble_gjort_i_din_bolig_eller_om_dudere_hadde_flyttet_til_en_tilpasset_bolig_ville",
        "Effekt av tilpasning",
        Scalar,
    ),
    (
        fields::NEIGHBOURHOOD_QUALITIES.category,
        fields::NEIGHBOURHOOD_QUALITIES.key,
        "Viktige nærmiljøkvaliteter",
        MultiChoice,
    ),
    (
        fields::PREFERRED_DWELLING.category,
        fields::PREFERRED_DWELLING.key,
        "Ønsket boligtype",
        MultiChoice,
    ),
    (
        fields::HOUSING_QUALITIES.category,
        fields::HOUSING_QUALITIES.key,
        "Viktige bokvaliteter",
        MultiChoice,
    ),
    (fields::BEDROOMS.category, fields::BEDROOMS.key, "Behov for soverom", Scalar),
    // Drag-and-drop ranking: every respondent lists every quality, so
    // per-option counts carry no information.
    (
        "boligpreferanser",
        "ranger_kvaliteter_du_ser_etter_i_en_ny_bolig_dra_og_slipp_de_viktigste_øverst_og_de_minst_viktige_ne",
        "Rangering av kvaliteter",
        FreeText,
    ),
    (fields::ADAPTATIONS.category, fields::ADAPTATIONS.key, "Tilgjengelighet", MultiChoice),
    (
        "tilgjengelighet_helse",
        "har_du_pårørende_eller_et_nettverk_rundt_deg_som_kunne_hjulpet_med_bosituasjonen_dersom_den_ikke_len",
        "Pårørende og nettverk",
        Scalar,
    ),
    (
        "tilgjengelighet_helse",
        "mottar_du_omsorgstjenester_av_kommunen_hjemme_hjemmetjenesten",
        "Mottar hjemmetjenester",
        Scalar,
    ),
    (
        "bofellesskap",
        "i_et_bofellesskap_har_du_en_privat_bolig_med_alle_funksjoner_i_tillegg_har_du_fellesarealer_som_kan_",
        "Interesse for bofellesskap",
        Scalar,
    ),
    (
        fields::SHARED_FACILITIES.category,
        fields::SHARED_FACILITIES.key,
        "Bofellesskap",
        MultiChoice,
    ),
    (
        fields::EXTRA_SERVICES.category,
        fields::EXTRA_SERVICES.key,
        "Tilleggstjenester",
        MultiChoice,
    ),
    (fields::BARRIERS.category, fields::BARRIERS.key, "Hindringer", MultiChoice),
    (fields::PURCHASE_CAPACITY.category, fields::PURCHASE_CAPACITY.key, "Kjøpekraft", Scalar),
    (
        fields::HOUSING_ALLOWANCE.category,
        fields::HOUSING_ALLOWANCE.key,
        "Kjennskap til bostøtte",
        Scalar,
    ),
    (
        fields::STARTER_LOAN.category,
        fields::STARTER_LOAN.key,
        "Kjennskap til startlån",
        Scalar,
    ),
];

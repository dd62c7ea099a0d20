//! All datasets and their accessors.
//!
//! One module per dataset, each following the same shape: a record schema,
//! a `LazyLock` static holding the literal content, and pure accessor
//! functions built from [`crate::query`]. This module is the single import
//! path the page layer uses.
//!
//! | Module | Page family |
//! |--------|-------------|
//! | [`roles`] / [`locations`] | canonical key dimensions |
//! | [`careers`] | career evaluations |
//! | [`guides`] | how-to-become guides |
//! | [`interviews`] | interview questions |
//! | [`pay`] | local pay pages (role × city) |
//! | [`employers`] | city employer profiles |
//! | [`personas`] | audience hub pages |
//! | [`templates`] | resume / cover-letter templates |
//! | [`taxes`] | state tax pages |

pub mod careers;
pub mod employers;
pub mod guides;
pub mod interviews;
pub mod locations;
pub mod pay;
pub mod personas;
pub mod roles;
pub mod taxes;
pub mod templates;

pub use careers::{
    CareerEvaluation, all_career_evaluations, get_career_evaluation_by_slug,
    get_careers_by_industry, get_highest_rated_careers,
};
pub use employers::{
    LocalEmployer, all_employers, get_employer_by_slug, get_employers_in_city,
    get_largest_employers,
};
pub use guides::{HowToBecomeGuide, all_guides, get_guide_by_slug, get_guides_by_difficulty};
pub use interviews::{
    InterviewGuide, all_interview_guides, get_interview_guide_by_slug,
    get_interview_guides_by_industry,
};
pub use locations::{City, all_cities, get_cities_in_state, get_city_by_slug};
pub use pay::{
    PayBracket, all_pay_brackets, get_pay_bracket, get_pay_brackets_for_role,
    role_city_combinations,
};
pub use personas::{PersonaHub, all_persona_hubs, get_persona_hub_by_slug};
pub use roles::{Role, all_roles, get_role_by_slug};
pub use taxes::{
    StateTaxGuide, all_state_tax_guides, get_state_tax_guide_by_slug, states_without_income_tax,
};
pub use templates::{
    DocumentTemplate, all_templates, get_template_by_slug, get_templates_by_kind,
};

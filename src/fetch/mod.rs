//! Vacancy fetching - query the HH.ru paginated search API
//!
//! This module builds typed search parameters and runs sequential,
//! blocking requests against the vacancies endpoint. Multi-page fetches
//! are merged into a single envelope; a page that fails is logged and
//! skipped so partial results still come back.

pub mod params;
pub mod client;

pub use params::{
    Currency, EmploymentForm, Experience, Label, Period, SearchField, SearchParams, WorkFormat,
    WorkSchedule, WorkingHours,
};
pub use client::{VacancyClient, VacancyPage, DEFAULT_BASE_URL};

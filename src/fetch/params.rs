//! Typed search parameters for the vacancies endpoint.
//!
//! Every enumerated query value is a Rust enum, so an unknown value is
//! rejected at argument-parse time instead of being silently dropped.
//! Defaults the API expects on every request are plain public fields of
//! [`SearchParams`], visible in `SearchParams::default()`.

use clap::ValueEnum;

/// Vacancy attribute matched against the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    #[value(name = "name")]
    Name,
    #[value(name = "company_name")]
    CompanyName,
    #[value(name = "description")]
    Description,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::CompanyName => "company_name",
            SearchField::Description => "description",
        }
    }
}

/// Salary currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Currency {
    #[value(name = "RUB")]
    Rub,
    #[value(name = "USD")]
    Usd,
    #[value(name = "EUR")]
    Eur,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

/// Required experience bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Experience {
    #[value(name = "noExperience")]
    NoExperience,
    #[value(name = "between1And3")]
    Between1And3,
    #[value(name = "between3And6")]
    Between3And6,
    #[value(name = "moreThan6")]
    MoreThan6,
}

impl Experience {
    pub fn as_str(self) -> &'static str {
        match self {
            Experience::NoExperience => "noExperience",
            Experience::Between1And3 => "between1And3",
            Experience::Between3And6 => "between3And6",
            Experience::MoreThan6 => "moreThan6",
        }
    }
}

/// Employment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmploymentForm {
    #[value(name = "FLY_IN_FLY_OUT")]
    FlyInFlyOut,
    #[value(name = "PROJECT")]
    Project,
    #[value(name = "PART")]
    Part,
    #[value(name = "FULL")]
    Full,
}

impl EmploymentForm {
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentForm::FlyInFlyOut => "FLY_IN_FLY_OUT",
            EmploymentForm::Project => "PROJECT",
            EmploymentForm::Part => "PART",
            EmploymentForm::Full => "FULL",
        }
    }
}

/// Special vacancy labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Label {
    #[value(name = "internship")]
    Internship,
    #[value(name = "night_shifts")]
    NightShifts,
    #[value(name = "accept_kids")]
    AcceptKids,
    #[value(name = "accept_handicapped")]
    AcceptHandicapped,
    #[value(name = "not_from_agency")]
    NotFromAgency,
    #[value(name = "with_address")]
    WithAddress,
    #[value(name = "accredited_it")]
    AccreditedIt,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Internship => "internship",
            Label::NightShifts => "night_shifts",
            Label::AcceptKids => "accept_kids",
            Label::AcceptHandicapped => "accept_handicapped",
            Label::NotFromAgency => "not_from_agency",
            Label::WithAddress => "with_address",
            Label::AccreditedIt => "accredited_it",
        }
    }
}

/// Work schedule by days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkSchedule {
    #[value(name = "WEEKEND")]
    Weekend,
    #[value(name = "FIVE_ON_TWO_OFF")]
    FiveOnTwoOff,
    #[value(name = "TWO_ON_TWO_OFF")]
    TwoOnTwoOff,
    #[value(name = "SIX_ON_ONE_OFF")]
    SixOnOneOff,
    #[value(name = "THREE_ON_THREE_OFF")]
    ThreeOnThreeOff,
    #[value(name = "FOUR_ON_FOUR_OFF")]
    FourOnFourOff,
    #[value(name = "FOUR_ON_THREE_OFF")]
    FourOnThreeOff,
    #[value(name = "FOUR_ON_TWO_OFF")]
    FourOnTwoOff,
    #[value(name = "THREE_ON_TWO_OFF")]
    ThreeOnTwoOff,
    #[value(name = "TWO_ON_ONE_OFF")]
    TwoOnOneOff,
    #[value(name = "ONE_ON_THREE_OFF")]
    OneOnThreeOff,
    #[value(name = "ONE_ON_TWO_OFF")]
    OneOnTwoOff,
    #[value(name = "FLEXIBLE")]
    Flexible,
    #[value(name = "OTHER")]
    Other,
}

impl WorkSchedule {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkSchedule::Weekend => "WEEKEND",
            WorkSchedule::FiveOnTwoOff => "FIVE_ON_TWO_OFF",
            WorkSchedule::TwoOnTwoOff => "TWO_ON_TWO_OFF",
            WorkSchedule::SixOnOneOff => "SIX_ON_ONE_OFF",
            WorkSchedule::ThreeOnThreeOff => "THREE_ON_THREE_OFF",
            WorkSchedule::FourOnFourOff => "FOUR_ON_FOUR_OFF",
            WorkSchedule::FourOnThreeOff => "FOUR_ON_THREE_OFF",
            WorkSchedule::FourOnTwoOff => "FOUR_ON_TWO_OFF",
            WorkSchedule::ThreeOnTwoOff => "THREE_ON_TWO_OFF",
            WorkSchedule::TwoOnOneOff => "TWO_ON_ONE_OFF",
            WorkSchedule::OneOnThreeOff => "ONE_ON_THREE_OFF",
            WorkSchedule::OneOnTwoOff => "ONE_ON_TWO_OFF",
            WorkSchedule::Flexible => "FLEXIBLE",
            WorkSchedule::Other => "OTHER",
        }
    }
}

/// Working hours per shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkingHours {
    #[value(name = "OTHER")]
    Other,
    #[value(name = "FLEXIBLE")]
    Flexible,
    #[value(name = "HOURS_24")]
    Hours24,
    #[value(name = "HOURS_12")]
    Hours12,
    #[value(name = "HOURS_11")]
    Hours11,
    #[value(name = "HOURS_10")]
    Hours10,
    #[value(name = "HOURS_9")]
    Hours9,
    #[value(name = "HOURS_8")]
    Hours8,
    #[value(name = "HOURS_7")]
    Hours7,
    #[value(name = "HOURS_6")]
    Hours6,
    #[value(name = "HOURS_5")]
    Hours5,
    #[value(name = "HOURS_4")]
    Hours4,
    #[value(name = "HOURS_3")]
    Hours3,
    #[value(name = "HOURS_2")]
    Hours2,
}

impl WorkingHours {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkingHours::Other => "OTHER",
            WorkingHours::Flexible => "FLEXIBLE",
            WorkingHours::Hours24 => "HOURS_24",
            WorkingHours::Hours12 => "HOURS_12",
            WorkingHours::Hours11 => "HOURS_11",
            WorkingHours::Hours10 => "HOURS_10",
            WorkingHours::Hours9 => "HOURS_9",
            WorkingHours::Hours8 => "HOURS_8",
            WorkingHours::Hours7 => "HOURS_7",
            WorkingHours::Hours6 => "HOURS_6",
            WorkingHours::Hours5 => "HOURS_5",
            WorkingHours::Hours4 => "HOURS_4",
            WorkingHours::Hours3 => "HOURS_3",
            WorkingHours::Hours2 => "HOURS_2",
        }
    }
}

/// Work format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkFormat {
    #[value(name = "ON_SITE")]
    OnSite,
    #[value(name = "REMOTE")]
    Remote,
    #[value(name = "HYBRID")]
    Hybrid,
    #[value(name = "FIELD_WORK")]
    FieldWork,
}

impl WorkFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkFormat::OnSite => "ON_SITE",
            WorkFormat::Remote => "REMOTE",
            WorkFormat::Hybrid => "HYBRID",
            WorkFormat::FieldWork => "FIELD_WORK",
        }
    }
}

/// Vacancy freshness window; the API accepts 3 or 7 days only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    #[value(name = "3")]
    ThreeDays,
    #[value(name = "7")]
    SevenDays,
}

impl Period {
    pub fn days(self) -> u8 {
        match self {
            Period::ThreeDays => 3,
            Period::SevenDays => 7,
        }
    }
}

/// One search request for the vacancies endpoint.
///
/// Built once per run and passed by value; the defaults here are exactly
/// the query the API receives when nothing else is set. Flags the API
/// treats as opt-in (`only_with_salary`, `accept_temporary`) are omitted
/// from the query unless enabled.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub text: Option<String>,
    pub search_fields: Vec<SearchField>,
    pub only_with_salary: bool,
    pub salary: Option<u32>,
    pub currency: Option<Currency>,
    pub experience: Vec<Experience>,
    pub employment_form: Vec<EmploymentForm>,
    pub accept_temporary: bool,
    pub labels: Vec<Label>,
    pub work_schedule: Vec<WorkSchedule>,
    pub working_hours: Vec<WorkingHours>,
    pub work_format: Vec<WorkFormat>,
    pub period: Option<Period>,
    pub page: u32,
    pub per_page: u32,

    // Sent on every request.
    pub host: String,
    pub responses_count_enabled: bool,
    pub with_chat_info: bool,
    pub check_personal_data_resale: bool,
    pub with_skills_match: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            text: None,
            search_fields: Vec::new(),
            only_with_salary: false,
            salary: None,
            currency: None,
            experience: Vec::new(),
            employment_form: Vec::new(),
            accept_temporary: false,
            labels: Vec::new(),
            work_schedule: Vec::new(),
            working_hours: Vec::new(),
            work_format: Vec::new(),
            period: None,
            page: 0,
            per_page: 100,
            host: "hh.ru".to_string(),
            responses_count_enabled: true,
            with_chat_info: true,
            check_personal_data_resale: false,
            with_skills_match: false,
        }
    }
}

impl SearchParams {
    /// The same search aimed at a different page.
    pub fn with_page(&self, page: u32) -> SearchParams {
        let mut params = self.clone();
        params.page = page;
        params
    }

    /// Render the query as repeated key=value pairs. Multi-valued fields
    /// repeat their key once per value.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query: Vec<(&'static str, String)> = vec![
            ("host", self.host.clone()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            (
                "responses_count_enabled",
                self.responses_count_enabled.to_string(),
            ),
            ("with_chat_info", self.with_chat_info.to_string()),
            (
                "check_personal_data_resale",
                self.check_personal_data_resale.to_string(),
            ),
            ("with_skills_match", self.with_skills_match.to_string()),
        ];

        if let Some(text) = &self.text {
            query.push(("text", text.clone()));
        }
        for field in &self.search_fields {
            query.push(("search_field", field.as_str().to_string()));
        }
        if self.only_with_salary {
            query.push(("only_with_salary", "true".to_string()));
        }
        if let Some(salary) = self.salary {
            query.push(("salary", salary.to_string()));
        }
        if let Some(currency) = self.currency {
            query.push(("currency", currency.as_str().to_string()));
        }
        for level in &self.experience {
            query.push(("experience", level.as_str().to_string()));
        }
        for form in &self.employment_form {
            query.push(("employment_form", form.as_str().to_string()));
        }
        if self.accept_temporary {
            query.push(("accept_temporary", "true".to_string()));
        }
        for label in &self.labels {
            query.push(("label", label.as_str().to_string()));
        }
        for schedule in &self.work_schedule {
            query.push(("work_schedule_by_days", schedule.as_str().to_string()));
        }
        for hours in &self.working_hours {
            query.push(("working_hours", hours.as_str().to_string()));
        }
        for format in &self.work_format {
            query.push(("work_format", format.as_str().to_string()));
        }
        if let Some(period) = self.period {
            query.push(("period", period.days().to_string()));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values_for<'a>(query: &'a [(&'static str, String)], key: &str) -> Vec<&'a str> {
        query
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_default_query_carries_api_defaults() {
        let query = SearchParams::default().to_query();
        assert_eq!(values_for(&query, "host"), vec!["hh.ru"]);
        assert_eq!(values_for(&query, "page"), vec!["0"]);
        assert_eq!(values_for(&query, "per_page"), vec!["100"]);
        assert_eq!(values_for(&query, "responses_count_enabled"), vec!["true"]);
        assert_eq!(values_for(&query, "with_chat_info"), vec!["true"]);
        assert_eq!(
            values_for(&query, "check_personal_data_resale"),
            vec!["false"]
        );
        assert_eq!(values_for(&query, "with_skills_match"), vec!["false"]);
    }

    #[test]
    fn test_optional_flags_omitted_unless_enabled() {
        let query = SearchParams::default().to_query();
        assert!(values_for(&query, "only_with_salary").is_empty());
        assert!(values_for(&query, "accept_temporary").is_empty());
        assert!(values_for(&query, "text").is_empty());

        let mut params = SearchParams::default();
        params.only_with_salary = true;
        params.accept_temporary = true;
        let query = params.to_query();
        assert_eq!(values_for(&query, "only_with_salary"), vec!["true"]);
        assert_eq!(values_for(&query, "accept_temporary"), vec!["true"]);
    }

    #[test]
    fn test_multi_valued_fields_repeat_their_key() {
        let mut params = SearchParams::default();
        params.experience = vec![Experience::NoExperience, Experience::Between1And3];
        params.work_format = vec![WorkFormat::Remote];

        let query = params.to_query();
        assert_eq!(
            values_for(&query, "experience"),
            vec!["noExperience", "between1And3"]
        );
        assert_eq!(values_for(&query, "work_format"), vec!["REMOTE"]);
    }

    #[test]
    fn test_schedule_uses_by_days_key() {
        let mut params = SearchParams::default();
        params.work_schedule = vec![WorkSchedule::Weekend];
        let query = params.to_query();
        assert_eq!(values_for(&query, "work_schedule_by_days"), vec!["WEEKEND"]);
        assert!(values_for(&query, "work_schedule").is_empty());
    }

    #[test]
    fn test_salary_and_period() {
        let mut params = SearchParams::default();
        params.salary = Some(250_000);
        params.currency = Some(Currency::Rub);
        params.period = Some(Period::SevenDays);

        let query = params.to_query();
        assert_eq!(values_for(&query, "salary"), vec!["250000"]);
        assert_eq!(values_for(&query, "currency"), vec!["RUB"]);
        assert_eq!(values_for(&query, "period"), vec!["7"]);
    }

    #[test]
    fn test_with_page_changes_only_the_page() {
        let params = SearchParams::default();
        let next = params.with_page(4);
        assert_eq!(next.page, 4);
        assert_eq!(next.per_page, params.per_page);
    }
}

// service/form_steps.rs
//
// Declarative multi-step form validation. Each wizard declares its steps as
// data; one engine tracks the current step, touched fields, and error
// messages, replacing the per-page touched/blurred bookkeeping the wizards
// used to duplicate.
use regex::Regex;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub enum FieldRule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    NumberMin(f64),
    NumberMax(f64),
    Pattern(&'static str, &'static str),
}

#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: Vec<FieldRule>,
}

#[derive(Debug, Clone)]
pub struct StepSchema {
    pub name: &'static str,
    pub fields: Vec<FieldSchema>,
}

fn field(name: &'static str, label: &'static str, rules: Vec<FieldRule>) -> FieldSchema {
    FieldSchema {
        field: name,
        label,
        rules,
    }
}

fn check_rule(rule: &FieldRule, label: &str, value: &str) -> Option<String> {
    match rule {
        FieldRule::Required => {
            if value.trim().is_empty() {
                return Some(format!("{} is required", label));
            }
        }
        FieldRule::MinLength(min) => {
            if value.chars().count() < *min {
                return Some(format!("{} must be at least {} characters", label, min));
            }
        }
        FieldRule::MaxLength(max) => {
            if value.chars().count() > *max {
                return Some(format!("{} must be at most {} characters", label, max));
            }
        }
        FieldRule::Email => {
            if !validator::validate_email(value) {
                return Some(format!("{} must be a valid email address", label));
            }
        }
        FieldRule::NumberMin(min) => match value.parse::<f64>() {
            Ok(n) if n >= *min => {}
            _ => return Some(format!("{} must be a number of at least {}", label, min)),
        },
        FieldRule::NumberMax(max) => match value.parse::<f64>() {
            Ok(n) if n <= *max => {}
            _ => return Some(format!("{} must be a number of at most {}", label, max)),
        },
        FieldRule::Pattern(pattern, message) => {
            let matches = Regex::new(pattern)
                .map(|re| re.is_match(value))
                .unwrap_or(false);
            if !matches {
                return Some(format!("{} {}", label, message));
            }
        }
    }

    None
}

/// Linear step machine. `next` validates the current step against the given
/// values and only advances when every field is clean; `previous` never
/// validates. Errors are kept per field for the UI to render next to
/// touched inputs.
#[derive(Debug)]
pub struct FormEngine {
    steps: Vec<StepSchema>,
    current: usize,
    completed: bool,
    touched: HashSet<String>,
    errors: HashMap<String, String>,
}

impl FormEngine {
    pub fn new(steps: Vec<StepSchema>) -> Self {
        FormEngine {
            steps,
            current: 0,
            completed: false,
            touched: HashSet::new(),
            errors: HashMap::new(),
        }
    }

    pub fn step_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepSchema {
        &self.steps[self.current]
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn touch(&mut self, field: &str) {
        self.touched.insert(field.to_string());
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|e| e.as_str())
    }

    /// Validate the current step's fields, recording the first failing rule
    /// per field. Every field of the step is marked touched so errors show.
    pub fn validate_current(&mut self, values: &HashMap<String, String>) -> bool {
        let step = self.steps[self.current].clone();
        let mut clean = true;

        for field_schema in &step.fields {
            self.touched.insert(field_schema.field.to_string());
            let empty = String::new();
            let value = values.get(field_schema.field).unwrap_or(&empty);

            let error = field_schema
                .rules
                .iter()
                .find_map(|rule| check_rule(rule, field_schema.label, value));

            match error {
                Some(message) => {
                    clean = false;
                    self.errors.insert(field_schema.field.to_string(), message);
                }
                None => {
                    self.errors.remove(field_schema.field);
                }
            }
        }

        clean
    }

    pub fn next(&mut self, values: &HashMap<String, String>) -> bool {
        if !self.validate_current(values) {
            return false;
        }

        if self.current + 1 < self.steps.len() {
            self.current += 1;
        } else {
            self.completed = true;
        }

        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }

        self.current -= 1;
        self.completed = false;
        true
    }
}

/// Registration wizard: account, profile, confirmation.
pub fn registration_steps() -> Vec<StepSchema> {
    vec![
        StepSchema {
            name: "account",
            fields: vec![
                field("name", "Name", vec![FieldRule::Required]),
                field("email", "Email", vec![FieldRule::Required, FieldRule::Email]),
                field(
                    "password",
                    "Password",
                    vec![FieldRule::Required, FieldRule::MinLength(6)],
                ),
            ],
        },
        StepSchema {
            name: "profile",
            fields: vec![
                field(
                    "username",
                    "Username",
                    vec![
                        FieldRule::Required,
                        FieldRule::MinLength(3),
                        FieldRule::Pattern(
                            r"^[a-zA-Z0-9_]+$",
                            "may only contain letters, digits and underscores",
                        ),
                    ],
                ),
                field("location", "Location", vec![]),
            ],
        },
        StepSchema {
            name: "confirm",
            fields: vec![field(
                "acceptTerms",
                "Terms of service",
                vec![FieldRule::Pattern(r"^true$", "must be accepted")],
            )],
        },
    ]
}

/// Advertisement wizard: basics, media, budget.
pub fn advertisement_steps() -> Vec<StepSchema> {
    vec![
        StepSchema {
            name: "basics",
            fields: vec![
                field(
                    "title",
                    "Title",
                    vec![FieldRule::Required, FieldRule::MinLength(6)],
                ),
                field("description", "Description", vec![FieldRule::Required]),
            ],
        },
        StepSchema {
            name: "media",
            fields: vec![field("imageUrl", "Image", vec![FieldRule::Required])],
        },
        StepSchema {
            name: "budget",
            fields: vec![
                field(
                    "budget",
                    "Budget",
                    vec![FieldRule::Required, FieldRule::NumberMin(1.0)],
                ),
                field(
                    "durationDays",
                    "Duration",
                    vec![
                        FieldRule::Required,
                        FieldRule::NumberMin(1.0),
                        FieldRule::NumberMax(90.0),
                    ],
                ),
            ],
        },
    ]
}

/// Product wizard: info, pricing, images, review.
pub fn product_steps() -> Vec<StepSchema> {
    vec![
        StepSchema {
            name: "info",
            fields: vec![
                field(
                    "title",
                    "Title",
                    vec![FieldRule::Required, FieldRule::MinLength(6)],
                ),
                field("category", "Category", vec![FieldRule::Required]),
            ],
        },
        StepSchema {
            name: "pricing",
            fields: vec![
                field(
                    "price",
                    "Price",
                    vec![FieldRule::Required, FieldRule::NumberMin(0.01)],
                ),
                field(
                    "quantity",
                    "Quantity",
                    vec![FieldRule::Required, FieldRule::NumberMin(1.0)],
                ),
            ],
        },
        StepSchema {
            name: "images",
            fields: vec![field("thumbnail", "Thumbnail", vec![FieldRule::Required])],
        },
        StepSchema {
            name: "review",
            fields: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn short_title_blocks_advancing() {
        let mut engine = FormEngine::new(advertisement_steps());
        let advanced = engine.next(&values(&[
            ("title", "short"),
            ("description", "A fine advert"),
        ]));

        assert!(!advanced);
        assert_eq!(engine.step_index(), 0);
        assert_eq!(
            engine.error("title"),
            Some("Title must be at least 6 characters")
        );
    }

    #[test]
    fn valid_step_advances_and_clears_errors() {
        let mut engine = FormEngine::new(advertisement_steps());
        assert!(!engine.next(&values(&[("title", "short")])));

        let advanced = engine.next(&values(&[
            ("title", "Summer sale"),
            ("description", "A fine advert"),
        ]));

        assert!(advanced);
        assert_eq!(engine.step_index(), 1);
        assert_eq!(engine.error("title"), None);
    }

    #[test]
    fn invalid_email_is_reported_per_field() {
        let mut engine = FormEngine::new(registration_steps());
        engine.next(&values(&[
            ("name", "Ada"),
            ("email", "not-an-email"),
            ("password", "secret1"),
        ]));

        assert_eq!(
            engine.error("email"),
            Some("Email must be a valid email address")
        );
        assert_eq!(engine.error("name"), None);
    }

    #[test]
    fn previous_never_validates() {
        let mut engine = FormEngine::new(advertisement_steps());
        assert!(engine.next(&values(&[
            ("title", "Summer sale"),
            ("description", "A fine advert"),
        ])));
        assert_eq!(engine.step_index(), 1);

        // Going back with garbage on the current step still works.
        assert!(engine.previous());
        assert_eq!(engine.step_index(), 0);
    }

    #[test]
    fn validating_marks_fields_touched() {
        let mut engine = FormEngine::new(registration_steps());
        assert!(!engine.is_touched("email"));

        engine.next(&HashMap::new());
        assert!(engine.is_touched("email"));
        assert!(engine.is_touched("password"));
    }

    #[test]
    fn finishing_the_last_step_completes_the_form() {
        let mut engine = FormEngine::new(advertisement_steps());
        assert!(engine.next(&values(&[
            ("title", "Summer sale"),
            ("description", "A fine advert"),
        ])));
        assert!(engine.next(&values(&[("imageUrl", "/uploads/ad.png")])));
        assert!(!engine.is_complete());

        assert!(engine.next(&values(&[("budget", "150"), ("durationDays", "30")])));
        assert!(engine.is_complete());
    }

    #[test]
    fn number_rules_reject_non_numeric_input() {
        let mut engine = FormEngine::new(product_steps());
        assert!(engine.next(&values(&[("title", "Walnut chair"), ("category", "furniture")])));

        let advanced = engine.next(&values(&[("price", "abc"), ("quantity", "2")]));
        assert!(!advanced);
        assert_eq!(
            engine.error("price"),
            Some("Price must be a number of at least 0.01")
        );
    }
}

/// How node labels are rendered. Never affects ids or edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Full client/project names, persons as "First L."
    Verbatim,
    /// Three-character client/project names, persons as initials.
    Anonymized,
}

impl LabelPolicy {
    pub fn from_flag(anonymize: bool) -> Self {
        if anonymize {
            LabelPolicy::Anonymized
        } else {
            LabelPolicy::Verbatim
        }
    }

    pub fn client_label(&self, name: &str) -> String {
        self.name_label(name)
    }

    pub fn project_label(&self, name: &str) -> String {
        self.name_label(name)
    }

    pub fn person_label(&self, first_name: &str, last_name: &str) -> String {
        match self {
            LabelPolicy::Anonymized => {
                let mut out = String::new();
                out.extend(initial(first_name));
                out.extend(initial(last_name));
                out
            }
            LabelPolicy::Verbatim => match initial(last_name) {
                Some(c) => format!("{first_name} {c}."),
                None => first_name.to_string(),
            },
        }
    }

    fn name_label(&self, name: &str) -> String {
        match self {
            LabelPolicy::Verbatim => name.to_string(),
            LabelPolicy::Anonymized => first_three(name),
        }
    }
}

/// First three characters, padded then trimmed: "Acme Corp" → "Acm", "Ab" → "Ab".
pub fn first_three(name: &str) -> String {
    let padded = format!("{name:<3}");
    padded.chars().take(3).collect::<String>().trim().to_string()
}

fn initial(s: &str) -> Option<char> {
    s.trim().chars().next()
}

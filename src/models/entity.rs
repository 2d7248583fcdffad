use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Node identity shared by clients, projects and persons.
pub type EntityId = u32;

/// A project is only unique inside its client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectKey {
    pub client: String,
    pub project: String,
}

impl ProjectKey {
    pub fn new(client: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            project: project.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonKey {
    pub first_name: String,
    pub last_name: String,
}

impl PersonKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_hours: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: EntityId,
    pub client_name: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_hours: Decimal,
}

impl Project {
    pub fn key(&self) -> ProjectKey {
        ProjectKey::new(self.client_name.clone(), self.name.clone())
    }
}

/// Persons carry no hours: their time only shows up on edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Person {
    pub fn key(&self) -> PersonKey {
        PersonKey::new(self.first_name.clone(), self.last_name.clone())
    }
}

/// Read-only lookup tables produced by the entity extractor.
///
/// Each entity list is kept in id order; the maps point into those lists.
#[derive(Debug, Default)]
pub struct Entities {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub persons: Vec<Person>,
    client_index: HashMap<String, usize>,
    project_index: HashMap<ProjectKey, usize>,
    person_index: HashMap<PersonKey, usize>,
}

impl Entities {
    pub fn new(clients: Vec<Client>, projects: Vec<Project>, persons: Vec<Person>) -> Self {
        let client_index = clients
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        let project_index = projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.key(), i))
            .collect();
        let person_index = persons
            .iter()
            .enumerate()
            .map(|(i, p)| (p.key(), i))
            .collect();

        Self {
            clients,
            projects,
            persons,
            client_index,
            project_index,
            person_index,
        }
    }

    pub fn client(&self, name: &str) -> Option<&Client> {
        self.client_index.get(name).map(|&i| &self.clients[i])
    }

    pub fn project(&self, key: &ProjectKey) -> Option<&Project> {
        self.project_index.get(key).map(|&i| &self.projects[i])
    }

    pub fn person(&self, key: &PersonKey) -> Option<&Person> {
        self.person_index.get(key).map(|&i| &self.persons[i])
    }

    /// Total number of extracted entities, projects included.
    pub fn len(&self) -> usize {
        self.clients.len() + self.projects.len() + self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Stack axes and the project specification assembled by the setup wizard.
//!
//! The four axes are closed sets: adding a value means adding an enum variant,
//! which forces every match site (labels, parsing, the action matrix) to be
//! revisited at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend implementation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    JavaScript,
    TypeScript,
    Go,
    Python,
}

impl Language {
    /// All supported languages, in presentation order.
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::Python,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Go => "Go",
            Language::Python => "Python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "go" | "golang" => Ok(Language::Go),
            "python" | "py" => Ok(Language::Python),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// Backend web framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    Express,
    Nest,
    Flask,
    Gin,
    FastAPI,
    Fiber,
}

impl Framework {
    /// All supported frameworks, in presentation order.
    pub const ALL: [Framework; 6] = [
        Framework::Express,
        Framework::Nest,
        Framework::Flask,
        Framework::Gin,
        Framework::FastAPI,
        Framework::Fiber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Express => "Express",
            Framework::Nest => "Nest",
            Framework::Flask => "Flask",
            Framework::Gin => "Gin",
            Framework::FastAPI => "FastAPI",
            Framework::Fiber => "Fiber",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "express" => Ok(Framework::Express),
            "nest" | "nestjs" => Ok(Framework::Nest),
            "flask" => Ok(Framework::Flask),
            "gin" => Ok(Framework::Gin),
            "fastapi" => Ok(Framework::FastAPI),
            "fiber" => Ok(Framework::Fiber),
            _ => Err(format!("unknown framework: {}", s)),
        }
    }
}

/// Backing database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Database {
    PostgreSQL,
    MongoDB,
    MySQL,
}

impl Database {
    /// All supported databases, in presentation order.
    pub const ALL: [Database; 3] = [Database::PostgreSQL, Database::MongoDB, Database::MySQL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Database::PostgreSQL => "PostgreSQL",
            Database::MongoDB => "MongoDB",
            Database::MySQL => "MySQL",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Database {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(Database::PostgreSQL),
            "mongodb" | "mongo" => Ok(Database::MongoDB),
            "mysql" => Ok(Database::MySQL),
            _ => Err(format!("unknown database: {}", s)),
        }
    }
}

/// Authentication method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    #[serde(rename = "JWT")]
    Jwt,
    Session,
    OAuth,
}

impl AuthType {
    /// All supported auth methods, in presentation order.
    pub const ALL: [AuthType; 3] = [AuthType::Jwt, AuthType::Session, AuthType::OAuth];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Jwt => "JWT",
            AuthType::Session => "Session",
            AuthType::OAuth => "OAuth",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jwt" => Ok(AuthType::Jwt),
            "session" => Ok(AuthType::Session),
            "oauth" | "oauth2" => Ok(AuthType::OAuth),
            _ => Err(format!("unknown auth method: {}", s)),
        }
    }
}

/// Composite dispatch key: one value from each axis, in fixed order.
///
/// Registration and lookup share the same enum values, so two keys are equal
/// exactly when the underlying selections are. The `Display` form
/// (`Language:Framework:Database:AuthType`) is for messages only and plays no
/// part in equality or hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackKey {
    pub language: Language,
    pub framework: Framework,
    pub database: Database,
    pub auth_type: AuthType,
}

impl StackKey {
    pub fn new(
        language: Language,
        framework: Framework,
        database: Database,
        auth_type: AuthType,
    ) -> Self {
        Self {
            language,
            framework,
            database,
            auth_type,
        }
    }

    /// Every combination of the four axes, in axis order.
    pub fn all_combinations() -> impl Iterator<Item = StackKey> {
        Language::ALL.into_iter().flat_map(|language| {
            Framework::ALL.into_iter().flat_map(move |framework| {
                Database::ALL.into_iter().flat_map(move |database| {
                    AuthType::ALL.into_iter().map(move |auth_type| StackKey {
                        language,
                        framework,
                        database,
                        auth_type,
                    })
                })
            })
        })
    }
}

impl fmt::Display for StackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.language, self.framework, self.database, self.auth_type
        )
    }
}

/// Project specification accumulated across the setup dialogue.
///
/// Scalar fields are overwritten by the prompt steps; `additional_details`
/// only ever grows, one entry per recorded follow-up answer. After the user
/// confirms, the value is handed to dispatch by shared reference and no longer
/// mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSpec {
    pub name: String,
    pub language: Language,
    pub framework: Framework,
    pub database: Database,
    pub use_auth: bool,
    pub auth_type: AuthType,
    pub purpose: String,
    pub features: String,
    pub additional_details: Vec<String>,
}

impl ProjectSpec {
    pub fn stack_key(&self) -> StackKey {
        StackKey::new(self.language, self.framework, self.database, self.auth_type)
    }

    /// Auth method label for prompts and summaries.
    pub fn auth_label(&self) -> &'static str {
        if self.use_auth {
            self.auth_type.as_str()
        } else {
            "None"
        }
    }
}

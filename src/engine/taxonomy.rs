//! Fixed skill taxonomy: categories, weights, and keyword lists

use serde::{Deserialize, Serialize};

/// Weight applied to categories the taxonomy does not know about.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.05;

/// One named skill category with its scoring weight and keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub weight: f64,
    pub keywords: Vec<String>,
}

/// Immutable catalog of skill categories.
///
/// Injected into the extractor and scorers at construction time; never
/// mutated after that, so the engine stays safe for concurrent use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    /// Build a taxonomy from explicit categories (mainly for tests).
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    /// The built-in catalog. Keywords are canonical lowercase strings.
    pub fn builtin() -> Self {
        let cat = |name: &str, weight: f64, keywords: &[&str]| SkillCategory {
            name: name.to_string(),
            weight,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self {
            categories: vec![
                cat(
                    "programming",
                    0.25,
                    &[
                        "python", "java", "javascript", "js", "c++", "c#", "php", "ruby", "go",
                        "rust", "swift", "kotlin", "scala", "r", "matlab", "perl", "bash",
                        "shell", "powershell",
                    ],
                ),
                cat(
                    "frameworks",
                    0.20,
                    &[
                        "django", "flask", "fastapi", "react", "angular", "vue", "spring",
                        "express", "laravel", "asp.net", "node.js", "jquery", "bootstrap",
                        "tailwind", "material-ui", "redux", "vuex", "next.js", "nuxt.js",
                    ],
                ),
                cat(
                    "databases",
                    0.15,
                    &[
                        "mysql", "postgresql", "postgres", "mongodb", "redis", "oracle",
                        "sqlite", "sql server", "mariadb", "cassandra", "elasticsearch",
                        "dynamodb", "firebase",
                    ],
                ),
                cat(
                    "cloud",
                    0.15,
                    &[
                        "aws", "amazon web services", "azure", "gcp", "google cloud", "docker",
                        "kubernetes", "k8s", "terraform", "ansible", "jenkins", "gitlab ci",
                        "github actions", "heroku", "digitalocean",
                    ],
                ),
                cat(
                    "tools",
                    0.10,
                    &[
                        "git", "github", "gitlab", "bitbucket", "jira", "confluence", "figma",
                        "adobe", "photoshop", "illustrator", "sketch", "postman", "swagger",
                        "vscode", "intellij", "eclipse", "vim", "emacs",
                    ],
                ),
                cat(
                    "methodologies",
                    0.10,
                    &[
                        "agile", "scrum", "kanban", "waterfall", "devops", "ci/cd", "tdd",
                        "bdd", "lean", "six sigma",
                    ],
                ),
                cat(
                    "languages",
                    0.05,
                    &[
                        "english", "spanish", "french", "german", "chinese", "japanese",
                        "korean", "hindi", "arabic", "portuguese", "italian", "russian",
                    ],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Scoring weight for a category name; unknown categories fall back
    /// to [`DEFAULT_CATEGORY_WEIGHT`].
    pub fn category_weight(&self, name: &str) -> f64 {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.weight)
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

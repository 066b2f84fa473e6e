// Testi fissi mostrati all'utente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    French,
    English,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Locale::French => "fr",
            Locale::English => "en",
        };
        write!(f, "{}", s)
    }
}

const ALL_LOCALES: [Locale; 2] = [Locale::French, Locale::English];

impl Locale {
    pub fn all() -> &'static [Locale] {
        &ALL_LOCALES
    }

    /// Accepts `fr`, `en` and region-qualified tags such as `en_US.UTF-8`.
    pub fn parse(tag: &str) -> Option<Locale> {
        let lang = tag
            .trim()
            .split(|c: char| c == '_' || c == '-' || c == '.')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" => Some(Locale::French),
            "en" => Some(Locale::English),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Locale::French => "Générateur de Résumés Automatiques",
            Locale::English => "Automatic Summary Generator",
        }
    }

    pub fn pick_file_label(&self) -> &'static str {
        match self {
            Locale::French => "Choisissez un fichier",
            Locale::English => "Choose a file",
        }
    }

    pub fn path_placeholder(&self) -> &'static str {
        match self {
            Locale::French => "Chemin du fichier ou du dossier",
            Locale::English => "File or folder path",
        }
    }

    pub fn parent_dir(&self) -> &'static str {
        match self {
            Locale::French => "Dossier parent",
            Locale::English => "Parent folder",
        }
    }

    pub fn no_selection(&self) -> &'static str {
        match self {
            Locale::French => "Aucun fichier sélectionné",
            Locale::English => "No file selected",
        }
    }

    pub fn selected_file(&self, name: &str, size: usize) -> String {
        match self {
            Locale::French => format!("Fichier sélectionné : {} ({} octets)", name, size),
            Locale::English => format!("Selected file: {} ({} bytes)", name, size),
        }
    }

    pub fn generate_button(&self) -> &'static str {
        match self {
            Locale::French => "Générer un Résumé",
            Locale::English => "Generate Summary",
        }
    }

    pub fn busy(&self) -> &'static str {
        match self {
            Locale::French => "Génération du résumé en cours...",
            Locale::English => "Generating summary...",
        }
    }

    pub fn summary_heading(&self) -> &'static str {
        match self {
            Locale::French => "Résumé Généré :",
            Locale::English => "Generated Summary:",
        }
    }

    /// Warning raised when the summary is requested before any file was chosen.
    pub fn no_file_warning(&self) -> &'static str {
        match self {
            Locale::French => "Veuillez importer un fichier !",
            Locale::English => "Please upload a file!",
        }
    }

    /// Shown in place of the summary whenever the request fails, whatever the cause.
    pub fn summary_error(&self) -> &'static str {
        match self {
            Locale::French => "Erreur lors de la génération du résumé. Veuillez réessayer.",
            Locale::English => "An error occurred while generating the summary. Please try again.",
        }
    }

    pub fn summary_ready(&self) -> &'static str {
        match self {
            Locale::French => "Résumé reçu",
            Locale::English => "Summary received",
        }
    }

    pub fn ok(&self) -> &'static str {
        "OK"
    }

    pub fn footer(&self) -> &'static str {
        match self {
            Locale::French => "© 2024 - Générateur de Résumés | Tous droits réservés",
            Locale::English => "© 2024 - Summary Generator | All rights reserved",
        }
    }
}

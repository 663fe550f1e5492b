// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Idiomas soportados por la interfaz
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    /// Código ISO usado en localStorage y en `Accept-Language`
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Etiqueta corta del selector de idioma
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::French => "FR",
        }
    }

    /// Código desconocido -> inglés
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "fr" => Language::French,
            _ => Language::English,
        }
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::French => {
            // NavBar
            translations.insert("app_name", "Portail");
            translations.insert("home", "Accueil");
            translations.insert("sign_up", "S'inscrire");
            translations.insert("login", "Se connecter");
            translations.insert("logout", "Déconnexion");
            translations.insert("my_profile", "Mon profil");

            // Formularios
            translations.insert("username", "Nom d'utilisateur");
            translations.insert("email", "E-mail");
            translations.insert("password", "Mot de passe");
            translations.insert("password_repeat", "Répéter le mot de passe");
            translations.insert("password_mismatch", "Les mots de passe ne correspondent pas");
            translations.insert("account_activation_notification", "Veuillez vérifier votre e-mail pour activer votre compte");
            translations.insert("authentication_failure", "Identifiants incorrects");
            translations.insert("generic_error", "Une erreur est survenue, veuillez réessayer");

            // Activación
            translations.insert("account_activation_success", "Le compte est activé");
            translations.insert("account_activation_failure", "Échec de l'activation");

            // Usuarios
            translations.insert("users", "Utilisateurs");
            translations.insert("next_page", "suivant >");
            translations.insert("previous_page", "< précédent");
            translations.insert("loading", "Chargement...");
            translations.insert("page_not_found", "Page introuvable");
        }
        Language::English => {
            // NavBar
            translations.insert("app_name", "Portal");
            translations.insert("home", "Home");
            translations.insert("sign_up", "Sign Up");
            translations.insert("login", "Login");
            translations.insert("logout", "Logout");
            translations.insert("my_profile", "My Profile");

            // Formularios
            translations.insert("username", "Username");
            translations.insert("email", "Email");
            translations.insert("password", "Password");
            translations.insert("password_repeat", "Password Repeat");
            translations.insert("password_mismatch", "Password mismatch");
            translations.insert("account_activation_notification", "Please check your e-mail to activate your account");
            translations.insert("authentication_failure", "Incorrect credentials");
            translations.insert("generic_error", "Something went wrong, please try again");

            // Activación
            translations.insert("account_activation_success", "Account is activated");
            translations.insert("account_activation_failure", "Activation failure");

            // Usuarios
            translations.insert("users", "Users");
            translations.insert("next_page", "next >");
            translations.insert("previous_page", "< previous");
            translations.insert("loading", "Loading...");
            translations.insert("page_not_found", "Page not found");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción para ella.
pub fn t(key: &str, lang: Language) -> String {
    get_translations(lang)
        .get(key)
        .map(|translation| translation.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_default() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(t("sign_up", Language::default()), "Sign Up");
    }

    #[test]
    fn french_strings_are_returned_for_french() {
        assert_eq!(t("password_repeat", Language::French), "Répéter le mot de passe");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", Language::French), "no_such_key");
    }

    #[test]
    fn both_tables_have_the_same_keys() {
        let mut english: Vec<_> = get_translations(Language::English).into_keys().collect();
        let mut french: Vec<_> = get_translations(Language::French).into_keys().collect();
        english.sort_unstable();
        french.sort_unstable();

        assert_eq!(english, french);
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code(" FR "), Language::French);
        assert_eq!(Language::from_code("tr"), Language::English);
    }
}

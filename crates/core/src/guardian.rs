//! Guardian contact records, sourced from the directory export only.

use serde::Serialize;

use crate::name;

#[derive(Debug, Clone, Serialize)]
pub struct Guardian {
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
}

impl Guardian {
    /// Build a guardian from raw cells. Email is case-folded; the address
    /// is title-cased and the school's own locality suffix elided when
    /// it matches (families in town don't need it repeated on every line).
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<String>,
        address: Option<String>,
        home_locality: Option<&str>,
    ) -> Self {
        let address = address
            .map(|a| clean_address(&a, home_locality))
            .filter(|a| !a.is_empty());
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Title-cased display name.
    pub fn display_name(&self) -> String {
        name::fix_name(&name::title_case(&self.name))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

fn clean_address(raw: &str, home_locality: Option<&str>) -> String {
    let mut address = name::title_case(raw.trim());
    if let Some(locality) = home_locality {
        let elide = regex::RegexBuilder::new(&regex::escape(locality))
            .case_insensitive(true)
            .build()
            .unwrap();
        address = elide.replace(&address, "").into_owned();
    }
    address.trim().trim_end_matches(',').trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_case_folded() {
        let g = Guardian::new("DOE, JOHN", "John.Doe@Example.COM", None, None, None);
        assert_eq!(g.email(), "john.doe@example.com");
    }

    #[test]
    fn display_name_title_cased_with_mc_repair() {
        let g = Guardian::new("MCDONALD, SARA", "s@example.com", None, None, None);
        assert_eq!(g.display_name(), "McDonald, Sara");
    }

    #[test]
    fn home_locality_elided_from_address() {
        let g = Guardian::new(
            "DOE, JOHN",
            "j@example.com",
            None,
            Some("123 MAIN ST LOMBARD, IL 60148".to_string()),
            Some("Lombard, IL 60148"),
        );
        assert_eq!(g.address(), Some("123 Main St"));
    }

    #[test]
    fn foreign_locality_kept() {
        let g = Guardian::new(
            "DOE, JOHN",
            "j@example.com",
            None,
            Some("9 OAK AVE VILLA PARK, IL 60181".to_string()),
            Some("Lombard, IL 60148"),
        );
        assert_eq!(g.address(), Some("9 Oak Ave Villa Park, Il 60181"));
    }

    #[test]
    fn empty_phone_and_address_become_none() {
        let g = Guardian::new(
            "DOE, JOHN",
            "j@example.com",
            Some("  ".to_string()),
            Some("LOMBARD, IL 60148".to_string()),
            Some("Lombard, IL 60148"),
        );
        assert!(g.phone().is_none());
        assert!(g.address().is_none());
    }
}

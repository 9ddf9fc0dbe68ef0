//! Built-in first-run content.
use crate::types::{ContactInfo, Lawyer, LocalizedText, SiteInfo, SocialLinks};
use chrono::{DateTime, TimeZone, Utc};

/// Credentials of the superadmin created when no admin exists yet.
pub const DEFAULT_ADMIN_USERNAME: &str = "superadmin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

fn text(ar: &str, en: &str) -> LocalizedText {
    LocalizedText {
        ar: ar.to_string(),
        en: en.to_string(),
    }
}

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The four lawyers shown before anyone edits the team.
pub fn default_lawyers() -> Vec<Lawyer> {
    let at = seeded_at();
    let lawyer = |id: &str,
                  name: LocalizedText,
                  title: LocalizedText,
                  specialty: LocalizedText,
                  bio: LocalizedText,
                  experience: &str| Lawyer {
        id: id.to_string(),
        name,
        title,
        specialty,
        bio,
        experience: experience.to_string(),
        image: None,
        created_at: at,
        updated_at: at,
    };

    vec![
        lawyer(
            "1",
            text("أحمد المنصوري", "Ahmed Al-Mansouri"),
            text("الشريك المؤسس", "Founding Partner"),
            text("قانون الشركات", "Corporate law"),
            text(
                "خبرة طويلة في تأسيس الشركات وصياغة العقود التجارية وتمثيل الشركات أمام المحاكم.",
                "Long experience in company formation, commercial contracts and corporate litigation.",
            ),
            "25",
        ),
        lawyer(
            "2",
            text("سارة الحربي", "Sarah Al-Harbi"),
            text("شريكة", "Partner"),
            text("قانون الأسرة", "Family law"),
            text(
                "متخصصة في قضايا الأحوال الشخصية والحضانة والنفقة والتسويات الودية.",
                "Handles personal status, custody, maintenance and amicable settlements.",
            ),
            "15",
        ),
        lawyer(
            "3",
            text("خالد العتيبي", "Khalid Al-Otaibi"),
            text("محامٍ أول", "Senior Associate"),
            text("القانون الجنائي", "Criminal law"),
            text(
                "ترافع في عدد كبير من القضايا الجنائية أمام جميع درجات التقاضي.",
                "Has argued a large number of criminal cases at every level of court.",
            ),
            "12",
        ),
        lawyer(
            "4",
            text("نورة القحطاني", "Noura Al-Qahtani"),
            text("مستشارة قانونية", "Legal Counsel"),
            text("القانون العقاري", "Real estate law"),
            text(
                "تقدم الاستشارات في عقود البيع والإيجار والنزاعات العقارية.",
                "Advises on sale and lease agreements and real estate disputes.",
            ),
            "8",
        ),
    ]
}

pub fn default_contact_info() -> ContactInfo {
    ContactInfo {
        address: text("شارع الملك فهد، الرياض", "King Fahd Road, Riyadh"),
        phones: vec!["+966 11 000 0000".to_string()],
        email: "info@aladl-law.example".to_string(),
        whatsapp: Some("+966500000000".to_string()),
        working_hours: text(
            "الأحد - الخميس، 9 صباحاً - 5 مساءً",
            "Sunday - Thursday, 9am - 5pm",
        ),
        social: SocialLinks::default(),
    }
}

pub fn default_site_info() -> SiteInfo {
    SiteInfo {
        firm_name: text(
            "مكتب العدل للمحاماة والاستشارات القانونية",
            "Al-Adl Law Firm & Legal Consultancy",
        ),
        tagline: text("العدالة أولاً", "Justice first"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lawyers_are_complete() {
        let lawyers = default_lawyers();
        assert_eq!(lawyers.len(), 4);
        for lawyer in &lawyers {
            assert!(lawyer.name.is_complete());
            assert!(lawyer.title.is_complete());
            assert!(lawyer.specialty.is_complete());
            assert!(!lawyer.experience.is_empty());
        }
        let mut ids: Vec<_> = lawyers.iter().map(|l| l.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}

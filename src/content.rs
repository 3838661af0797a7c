//! Static site content
//!
//! Clinic facts and the catalogs rendered by the page sections. The same
//! facts feed the assistant's system instruction.

use serde::Serialize;

/// Contact and identity facts for the clinic
#[derive(Debug, Clone, Serialize)]
pub struct ClinicInfo {
    pub name: &'static str,
    pub slogan: &'static str,
    pub accreditation: &'static str,
    pub founded: u16,
    pub locality: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub phone_link: &'static str,
    pub whatsapp_link: &'static str,
    pub emails: &'static [&'static str],
}

pub const CLINIC: ClinicInfo = ClinicInfo {
    name: "Renice Medical Centre",
    slogan: "CARE FOR ALL",
    accreditation: "Level 3",
    founded: 2012,
    locality: "Mlolongo, Kenya",
    address: "Renice Building, Mlolongo, Machakos County, Kenya",
    phone: "+254 707 167 434",
    phone_link: "tel:+254707167434",
    whatsapp_link: "https://wa.me/254707167434?text=I%20would%20like%20to%20inquire%20about%20your%20services.",
    emails: &[
        "care@renicemedicacenter.co.ke",
        "renicefamilyhospitalltd@gmail.com",
    ],
};

/// A clinical service card
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    /// One-line summary used by the assistant's instruction
    pub summary: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "outpatient",
        title: "Outpatient Consultation",
        summary: "Outpatient (24/7 acute/chronic care)",
        description: "Our team of highly qualified medical officers and clinical officers provides round-the-clock primary care. We specialize in managing acute illnesses and chronic lifestyle conditions like Hypertension and Diabetes using the latest evidence-based guidelines. Patients benefit from rapid triage, professional diagnosis, and a holistic approach to wellness that prioritizes long-term health outcomes.",
    },
    Service {
        id: "lab",
        title: "Level 3 Laboratory Services",
        summary: "Laboratory (High-precision Level 3 diagnostics)",
        description: "Equipped with cutting-edge automated hematology and biochemistry analyzers, our laboratory provides high-precision diagnostics. We offer a wide range of tests including Complete Blood Counts (CBC), Renal and Liver Function Tests (LFTs/RFTs), Lipid Profiles, and rapid infectious disease screenings. Results are processed under strict quality control protocols and shared promptly with patients via secure digital or physical reports for immediate clinical action.",
    },
    Service {
        id: "pharmacy",
        title: "24/7 Fully Stocked Pharmacy",
        summary: "Pharmacy (24/7 genuine medications)",
        description: "Managed by licensed clinical pharmacists, our pharmacy ensures access to genuine, high-quality medications at all times. We utilize digital inventory management systems to maintain consistent stock of essential pediatric syrups, antibiotics, and chronic management drugs. Our staff provides professional counseling on medication adherence, potential side effects, and drug-food interactions to ensure optimal recovery for every patient.",
    },
    Service {
        id: "maternity",
        title: "Maternity & Neonatal Care",
        summary: "Maternity (Safe delivery & neonatal care)",
        description: "We provide a compassionate and safe environment for expectant mothers, featuring modern labor suites and neonatal resuscitation equipment. Our experienced obstetric team offers comprehensive Antenatal (ANC) and Postnatal care, supported by ultrasound technology for fetal monitoring. We are dedicated to ensuring safe deliveries and the highest standards of neonatal health for the newest members of our community.",
    },
    Service {
        id: "specialized",
        title: "Specialized Clinical Services",
        summary: "Specialized Clinics (Pediatrics, Gynecology, Internal Medicine)",
        description: "Access expert care in Pediatrics, Gynecology, and Internal Medicine within your neighborhood. We utilize modern diagnostic tools for comprehensive screenings, including cervical cancer screening (Pap Smears), pediatric growth monitoring, and gynecological consultations. Our specialized clinics bring consultant-level expertise to Mlolongo, ensuring you don't have to travel far for high-quality specialized health assessments.",
    },
    Service {
        id: "inpatient",
        title: "Inpatient Care & Recovery",
        summary: "Inpatient/Observation (Skilled recovery monitoring)",
        description: "Our inpatient department offers 24-hour skilled nursing monitoring and medical supervision for patients requiring stabilization or post-procedural care. Wards are equipped with modern patient beds, central oxygen supply systems, and advanced monitoring equipment. We prioritize a safe, restful, and hygienic healing environment, ensuring patients receive nutritional support and constant care during their recovery journey.",
    },
    Service {
        id: "private-wing",
        title: "Exclusive Private Wing",
        summary: "Private Wing (Premium en-suite rooms and personalized nursing care)",
        description: "For patients seeking enhanced comfort and privacy, our Exclusive Private Wing offers premium amenities including private en-suite rooms, personalized nursing care, and a tranquil atmosphere designed for restful recovery. It combines our professional Level 3 medical expertise with the comfort of a home-like environment, ensuring a discrete and high-quality healing experience for those requiring focused individual attention.",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What insurance covers do you accept?",
        answer: "We officially accept SHA (Social Health Authority) and MUA Insurance Cover. We are committed to making healthcare affordable and accessible for our community.",
    },
    FaqEntry {
        question: "Do I need to book an appointment for outpatient services?",
        answer: "While we encourage booking appointments for specialized clinics to reduce waiting times, we also welcome walk-in patients for general outpatient consultations 24/7.",
    },
    FaqEntry {
        question: "What are the laboratory operating hours?",
        answer: "Our Level 3 laboratory is fully operational 24 hours a day, 7 days a week, ensuring you get diagnostic results whenever you need them.",
    },
    FaqEntry {
        question: "Do you offer maternity and delivery services?",
        answer: "Yes, as a Level 3 Accredited facility, we offer comprehensive maternity care, including ANC clinics, safe delivery services, and postnatal care.",
    },
    FaqEntry {
        question: "Where exactly are you located in Mlolongo?",
        answer: "We are located at the Renice Building in Mlolongo, Machakos County. We are easily accessible for residents of Mlolongo, Syokimau, and surrounding areas.",
    },
    FaqEntry {
        question: "What payment methods do you accept for non-insured patients?",
        answer: "We accept Cash, M-Pesa, and all major Credit/Debit cards for your convenience.",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        quote: "The staff at Renice were incredibly kind and professional. I brought my son for an emergency, and we were attended to almost immediately. Truly CARE FOR ALL.",
        name: "Jane D.",
        location: "Mlolongo Phase 3",
    },
    Testimonial {
        id: 2,
        quote: "Fast lab results and very affordable pharmacy prices. I highly recommend Renice Medical Centre to anyone living in the Syokimau or Mlolongo area.",
        name: "Peter K.",
        location: "Syokimau Resident",
    },
    Testimonial {
        id: 3,
        quote: "I delivered my first baby here. The maternity wing is clean, and the nurses were so supportive during my stay. Thank you for the wonderful care!",
        name: "Sarah M.",
        location: "Mlolongo Town",
    },
];

/// Page sections that navigation can scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    Services,
    Insurance,
    About,
    Faq,
    Testimonials,
    Contact,
}

impl Section {
    /// DOM anchor id of the section
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Insurance => "insurance",
            Section::About => "about",
            Section::Faq => "faq",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub section: Section,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", section: Section::Home },
    NavLink { name: "Services", section: Section::Services },
    NavLink { name: "Insurance", section: Section::Insurance },
    NavLink { name: "About Us", section: Section::About },
    NavLink { name: "FAQ", section: Section::Faq },
    NavLink { name: "Contact", section: Section::Contact },
];

pub const INSURANCE_PARTNERS: &[&str] = &[
    "SHA (Social Health Authority)",
    "MUA Insurance Cover",
    "MoH Registered (Level 3)",
];

pub const PAYMENT_METHODS: &[&str] = &["Cash", "M-Pesa", "Credit Cards"];

/// Choices offered by the contact section's inquiry form
pub const INQUIRY_SERVICES: &[&str] = &[
    "General Consultation",
    "Maternity & Delivery",
    "Laboratory Services",
    "Specialized Clinic",
    "Private Wing Services",
    "Pharmacy Inquiry",
];

/// Everything the page renders, as one JSON document
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub clinic: ClinicInfo,
    pub nav_links: &'static [NavLink],
    pub services: &'static [Service],
    pub faq: &'static [FaqEntry],
    pub testimonials: &'static [Testimonial],
    pub insurance_partners: &'static [&'static str],
    pub payment_methods: &'static [&'static str],
    pub inquiry_services: &'static [&'static str],
}

pub fn site_content() -> SiteContent {
    SiteContent {
        clinic: CLINIC,
        nav_links: NAV_LINKS,
        services: SERVICES,
        faq: FAQ,
        testimonials: TESTIMONIALS,
        insurance_partners: INSURANCE_PARTNERS,
        payment_methods: PAYMENT_METHODS,
        inquiry_services: INQUIRY_SERVICES,
    }
}

//! Advisory document checklist keyed by the visa status label reported by the
//! rules provider.

use serde::Serialize;

/// Visa type and the documents a traveller should prepare for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub visa_type: &'static str,
    pub documents: &'static [&'static str],
}

/// Status labels with a dedicated checklist. Anything else the provider
/// reports resolves to [`VisaStatus::NotMentioned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaStatus {
    VisaFree,
    VisaOnArrival,
    EVisa,
    VisaRequired,
    NotMentioned,
}

impl VisaStatus {
    pub const ALL: [VisaStatus; 5] = [
        VisaStatus::VisaFree,
        VisaStatus::VisaOnArrival,
        VisaStatus::EVisa,
        VisaStatus::VisaRequired,
        VisaStatus::NotMentioned,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Visa Free" => VisaStatus::VisaFree,
            "Visa on Arrival" => VisaStatus::VisaOnArrival,
            "e-Visa" => VisaStatus::EVisa,
            "Visa Required" => VisaStatus::VisaRequired,
            _ => VisaStatus::NotMentioned,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisaStatus::VisaFree => "Visa Free",
            VisaStatus::VisaOnArrival => "Visa on Arrival",
            VisaStatus::EVisa => "e-Visa",
            VisaStatus::VisaRequired => "Visa Required",
            VisaStatus::NotMentioned => "Not Mentioned",
        }
    }

    pub fn requirement(self) -> DocumentRequirement {
        match self {
            VisaStatus::VisaFree => VISA_FREE,
            VisaStatus::VisaOnArrival => VISA_ON_ARRIVAL,
            VisaStatus::EVisa => E_VISA,
            VisaStatus::VisaRequired => VISA_REQUIRED,
            VisaStatus::NotMentioned => NOT_MENTIONED,
        }
    }
}

/// Total lookup: unknown labels (including `"N/A"`) fall through to the
/// "Not Mentioned" checklist.
pub fn lookup(status: &str) -> DocumentRequirement {
    VisaStatus::from_label(status).requirement()
}

const VISA_FREE: DocumentRequirement = DocumentRequirement {
    visa_type: "Tourist/Visitor",
    documents: &[
        "Valid Passport (6+ months validity)",
        "Return/Onward ticket",
        "Proof of accommodation",
        "Travel insurance (recommended)",
    ],
};

const VISA_ON_ARRIVAL: DocumentRequirement = DocumentRequirement {
    visa_type: "Tourist/Visitor (On Arrival)",
    documents: &[
        "Valid Passport",
        "Return ticket",
        "Proof of funds",
        "Completed application form",
        "Passport photos (usually 1-2)",
        "Proof of accommodation",
    ],
};

const E_VISA: DocumentRequirement = DocumentRequirement {
    visa_type: "Electronic Visa",
    documents: &[
        "Valid Passport",
        "Digital photo (digital submission)",
        "Email address",
        "Credit/Debit card for payment",
        "Return ticket",
        "Proof of accommodation",
    ],
};

const VISA_REQUIRED: DocumentRequirement = DocumentRequirement {
    visa_type: "Standard Visa",
    documents: &[
        "Valid Passport",
        "Completed visa application form",
        "Passport photos (usually 2-4)",
        "Proof of funds",
        "Return ticket",
        "Letter of invitation (if required)",
        "Proof of accommodation",
        "Travel insurance",
        "Yellow fever vaccination (if applicable)",
        "Bank statements",
        "Employment letter",
        "Hotel reservations",
    ],
};

const NOT_MENTIONED: DocumentRequirement = DocumentRequirement {
    visa_type: "Unknown",
    documents: &["Contact the destination embassy for details"],
};

//! Built-in reference tables.

use super::VocabularyData;

pub(super) fn data() -> VocabularyData {
    VocabularyData {
        drugs: default_drugs(),
        conditions: default_conditions(),
        brands: default_brands(),
    }
}

/// Known generic drug names.
fn default_drugs() -> Vec<String> {
    [
        // Anti-TNF
        "adalimumab",
        "infliximab",
        "golimumab",
        "certolizumab",
        "etanercept",
        // Integrin / interleukin
        "vedolizumab",
        "natalizumab",
        "ustekinumab",
        "risankizumab",
        "mirikizumab",
        "guselkumab",
        "secukinumab",
        "ixekizumab",
        "tocilizumab",
        // Small molecules
        "tofacitinib",
        "upadacitinib",
        "filgotinib",
        "baricitinib",
        "ozanimod",
        "etrasimod",
        "apremilast",
        // Conventional
        "mesalamine",
        "sulfasalazine",
        "budesonide",
        "prednisone",
        "methotrexate",
        "azathioprine",
        "mercaptopurine",
        "hydroxychloroquine",
        "leflunomide",
        // Other
        "rituximab",
        "abatacept",
        "dupilumab",
        "metformin",
        "semaglutide",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Known condition names.
fn default_conditions() -> Vec<String> {
    [
        "ulcerative colitis",
        "crohn's disease",
        "inflammatory bowel disease",
        "rheumatoid arthritis",
        "psoriatic arthritis",
        "plaque psoriasis",
        "ankylosing spondylitis",
        "juvenile idiopathic arthritis",
        "hidradenitis suppurativa",
        "uveitis",
        "atopic dermatitis",
        "multiple sclerosis",
        "systemic lupus erythematosus",
        "type 2 diabetes",
        "obesity",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Brand name → generic name.
fn default_brands() -> Vec<(String, String)> {
    [
        // Anti-TNF
        ("humira", "adalimumab"),
        ("amjevita", "adalimumab"),
        ("hyrimoz", "adalimumab"),
        ("remicade", "infliximab"),
        ("inflectra", "infliximab"),
        ("renflexis", "infliximab"),
        ("simponi", "golimumab"),
        ("cimzia", "certolizumab"),
        ("enbrel", "etanercept"),
        // Integrin / interleukin
        ("entyvio", "vedolizumab"),
        ("tysabri", "natalizumab"),
        ("stelara", "ustekinumab"),
        ("skyrizi", "risankizumab"),
        ("omvoh", "mirikizumab"),
        ("tremfya", "guselkumab"),
        ("cosentyx", "secukinumab"),
        ("taltz", "ixekizumab"),
        ("actemra", "tocilizumab"),
        // Small molecules
        ("xeljanz", "tofacitinib"),
        ("rinvoq", "upadacitinib"),
        ("jyseleca", "filgotinib"),
        ("olumiant", "baricitinib"),
        ("zeposia", "ozanimod"),
        ("velsipity", "etrasimod"),
        ("otezla", "apremilast"),
        // Conventional
        ("lialda", "mesalamine"),
        ("asacol", "mesalamine"),
        ("pentasa", "mesalamine"),
        ("azulfidine", "sulfasalazine"),
        ("uceris", "budesonide"),
        ("entocort", "budesonide"),
        ("trexall", "methotrexate"),
        ("otrexup", "methotrexate"),
        ("imuran", "azathioprine"),
        ("purinethol", "mercaptopurine"),
        ("plaquenil", "hydroxychloroquine"),
        ("arava", "leflunomide"),
        // Other
        ("rituxan", "rituximab"),
        ("orencia", "abatacept"),
        ("dupixent", "dupilumab"),
        ("glucophage", "metformin"),
        ("ozempic", "semaglutide"),
        ("wegovy", "semaglutide"),
    ]
    .into_iter()
    .map(|(brand, generic)| (brand.to_string(), generic.to_string()))
    .collect()
}

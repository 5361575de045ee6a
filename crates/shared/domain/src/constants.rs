//! Well-known namespace URIs, their canonical prefixes, and the standard
//! alias seed.
//!
//! Registries seed these before any caller-driven registration, through the
//! same uniqueness and validation logic as external calls. URIs end in a name
//! separator (`/` or `#`) by convention.

use crate::forms::ArrayForm;

// --- XML / RDF base vocabularies ---

pub const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";
pub const NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";

// --- Metadata packet envelope ---

pub const NS_META: &str = "adobe:ns:meta/";

// --- Core metadata schemas ---

pub const NS_XMP: &str = "http://ns.adobe.com/xap/1.0/";
pub const NS_XMP_RIGHTS: &str = "http://ns.adobe.com/xap/1.0/rights/";
pub const NS_XMP_MM: &str = "http://ns.adobe.com/xap/1.0/mm/";
pub const NS_XMP_BJ: &str = "http://ns.adobe.com/xap/1.0/bj/";
pub const NS_XMP_TPG: &str = "http://ns.adobe.com/xap/1.0/t/pg/";
pub const NS_XMP_IDQ: &str = "http://ns.adobe.com/xmp/Identifier/qual/1.0/";
pub const NS_XMP_G_IMG: &str = "http://ns.adobe.com/xap/1.0/g/img/";

// --- Application schemas ---

pub const NS_PDF: &str = "http://ns.adobe.com/pdf/1.3/";
pub const NS_PHOTOSHOP: &str = "http://ns.adobe.com/photoshop/1.0/";
pub const NS_CAMERA_RAW: &str = "http://ns.adobe.com/camera-raw-settings/1.0/";
pub const NS_TIFF: &str = "http://ns.adobe.com/tiff/1.0/";
pub const NS_EXIF: &str = "http://ns.adobe.com/exif/1.0/";
pub const NS_EXIF_AUX: &str = "http://ns.adobe.com/exif/1.0/aux/";
pub const NS_IPTC_CORE: &str = "http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/";

// --- Structure-type field namespaces ---

pub const NS_ST_DIMENSIONS: &str = "http://ns.adobe.com/xap/1.0/sType/Dimensions#";
pub const NS_ST_RESOURCE_EVENT: &str = "http://ns.adobe.com/xap/1.0/sType/ResourceEvent#";
pub const NS_ST_RESOURCE_REF: &str = "http://ns.adobe.com/xap/1.0/sType/ResourceRef#";
pub const NS_ST_VERSION: &str = "http://ns.adobe.com/xap/1.0/sType/Version#";
pub const NS_ST_JOB: &str = "http://ns.adobe.com/xap/1.0/sType/Job#";

/// The default `(uri, canonical prefix)` pairs every registry starts from.
pub const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    (NS_XML, "xml"),
    (NS_RDF, "rdf"),
    (NS_DC, "dc"),
    (NS_META, "x"),
    (NS_XMP, "xmp"),
    (NS_XMP_RIGHTS, "xmpRights"),
    (NS_XMP_MM, "xmpMM"),
    (NS_XMP_BJ, "xmpBJ"),
    (NS_XMP_TPG, "xmpTPg"),
    (NS_XMP_IDQ, "xmpidq"),
    (NS_XMP_G_IMG, "xmpGImg"),
    (NS_PDF, "pdf"),
    (NS_PHOTOSHOP, "photoshop"),
    (NS_CAMERA_RAW, "crs"),
    (NS_TIFF, "tiff"),
    (NS_EXIF, "exif"),
    (NS_EXIF_AUX, "aux"),
    (NS_IPTC_CORE, "Iptc4xmpCore"),
    (NS_ST_DIMENSIONS, "stDim"),
    (NS_ST_RESOURCE_EVENT, "stEvt"),
    (NS_ST_RESOURCE_REF, "stRef"),
    (NS_ST_VERSION, "stVer"),
    (NS_ST_JOB, "stJob"),
];

/// The standard alias seed:
/// `(alias_ns, alias_prop, actual_ns, actual_prop, array_form)`.
///
/// No seeded actual is itself an alias key; the set stays chain-free under
/// strict registration.
pub const DEFAULT_ALIASES: &[(&str, &str, &str, &str, ArrayForm)] = &[
    // Core schema onto Dublin Core
    (NS_XMP, "Author", NS_DC, "creator", ArrayForm::ArrayFirstItem),
    (NS_XMP, "Authors", NS_DC, "creator", ArrayForm::Direct),
    (NS_XMP, "Description", NS_DC, "description", ArrayForm::Direct),
    (NS_XMP, "Format", NS_DC, "format", ArrayForm::Direct),
    (NS_XMP, "Keywords", NS_DC, "subject", ArrayForm::Direct),
    (NS_XMP, "Locale", NS_DC, "language", ArrayForm::Direct),
    (NS_XMP, "Title", NS_DC, "title", ArrayForm::Direct),
    (NS_XMP_RIGHTS, "Copyright", NS_DC, "rights", ArrayForm::Direct),
    // PDF schema
    (NS_PDF, "Author", NS_DC, "creator", ArrayForm::ArrayFirstItem),
    (NS_PDF, "BaseURL", NS_XMP, "BaseURL", ArrayForm::Direct),
    (NS_PDF, "CreationDate", NS_XMP, "CreateDate", ArrayForm::Direct),
    (NS_PDF, "Creator", NS_XMP, "CreatorTool", ArrayForm::Direct),
    (NS_PDF, "ModDate", NS_XMP, "ModifyDate", ArrayForm::Direct),
    (NS_PDF, "Subject", NS_DC, "description", ArrayForm::AltTextDefaultItem),
    (NS_PDF, "Title", NS_DC, "title", ArrayForm::AltTextDefaultItem),
    // Photoshop schema
    (NS_PHOTOSHOP, "Author", NS_DC, "creator", ArrayForm::ArrayFirstItem),
    (NS_PHOTOSHOP, "Caption", NS_DC, "description", ArrayForm::AltTextDefaultItem),
    (NS_PHOTOSHOP, "Copyright", NS_DC, "rights", ArrayForm::AltTextDefaultItem),
    (NS_PHOTOSHOP, "Keywords", NS_DC, "subject", ArrayForm::Direct),
    (NS_PHOTOSHOP, "Marked", NS_XMP_RIGHTS, "Marked", ArrayForm::Direct),
    (NS_PHOTOSHOP, "Title", NS_DC, "title", ArrayForm::AltTextDefaultItem),
    (NS_PHOTOSHOP, "WebStatement", NS_XMP_RIGHTS, "WebStatement", ArrayForm::Direct),
    // TIFF/EXIF schemas
    (NS_TIFF, "Artist", NS_DC, "creator", ArrayForm::ArrayFirstItem),
    (NS_TIFF, "Copyright", NS_DC, "rights", ArrayForm::Direct),
    (NS_TIFF, "DateTime", NS_XMP, "ModifyDate", ArrayForm::Direct),
    (NS_TIFF, "ImageDescription", NS_DC, "description", ArrayForm::Direct),
    (NS_TIFF, "Software", NS_XMP, "CreatorTool", ArrayForm::Direct),
];

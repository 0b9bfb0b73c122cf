//! Access permissions for the standard security handler (ISO 32000-1 Table 22)

/// Bit positions of the user access permissions, zero-based.
const PRINT: u32 = 1 << 2;
const MODIFY: u32 = 1 << 3;
const EXTRACT_CONTENT: u32 = 1 << 4;
const MODIFY_ANNOTATIONS: u32 = 1 << 5;
const FILL_FORM: u32 = 1 << 8;
const EXTRACT_FOR_ACCESSIBILITY: u32 = 1 << 9;
const ASSEMBLE_DOCUMENT: u32 = 1 << 10;
const PRINT_DEGRADED: u32 = 1 << 11;

/// Bits 1-2 clear, reserved bits 7-8 and 13-32 set, every permission denied.
const BASE: u32 = 0xFFFF_F0C0;

/// The eight user access permissions granted to a protected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Print the document
    pub can_print: bool,
    /// Print at full fidelity (bit 12)
    pub can_print_degraded: bool,
    /// Modify document contents
    pub can_modify: bool,
    /// Copy or otherwise extract text and graphics
    pub can_extract_content: bool,
    /// Add or modify annotations
    pub can_modify_annotations: bool,
    /// Fill in existing form fields
    pub can_fill_form: bool,
    /// Extract text and graphics for accessibility tools
    pub can_extract_for_accessibility: bool,
    /// Insert, rotate or delete pages
    pub can_assemble_document: bool,
}

impl AccessPolicy {
    /// The policy applied by the protect operation.
    ///
    /// Printing, form filling and accessibility extraction stay allowed;
    /// modification, content extraction, annotation edits and page assembly
    /// are denied.
    pub const fn restricted() -> Self {
        Self {
            can_print: true,
            can_print_degraded: true,
            can_modify: false,
            can_extract_content: false,
            can_modify_annotations: false,
            can_fill_form: true,
            can_extract_for_accessibility: true,
            can_assemble_document: false,
        }
    }

    /// Policy with every operation allowed
    pub const fn unrestricted() -> Self {
        Self {
            can_print: true,
            can_print_degraded: true,
            can_modify: true,
            can_extract_content: true,
            can_modify_annotations: true,
            can_fill_form: true,
            can_extract_for_accessibility: true,
            can_assemble_document: true,
        }
    }

    /// Encode as the 32-bit `/P` value
    pub fn bits(&self) -> u32 {
        let mut bits = BASE;
        for (allowed, bit) in self.flag_bits() {
            if allowed {
                bits |= bit;
            }
        }
        bits
    }

    /// Decode a `/P` value. Reserved bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        let has = |bit: u32| bits & bit != 0;
        Self {
            can_print: has(PRINT),
            can_print_degraded: has(PRINT_DEGRADED),
            can_modify: has(MODIFY),
            can_extract_content: has(EXTRACT_CONTENT),
            can_modify_annotations: has(MODIFY_ANNOTATIONS),
            can_fill_form: has(FILL_FORM),
            can_extract_for_accessibility: has(EXTRACT_FOR_ACCESSIBILITY),
            can_assemble_document: has(ASSEMBLE_DOCUMENT),
        }
    }

    /// Decode the signed integer stored in an encryption dictionary
    pub fn from_p_value(p: i64) -> Self {
        Self::from_bits(p as u32)
    }

    /// The permission set in the form the PDF engine expects
    pub fn to_lopdf(&self) -> lopdf::Permissions {
        let mut permissions = lopdf::Permissions::empty();
        permissions.set(lopdf::Permissions::PRINTABLE, self.can_print);
        permissions.set(
            lopdf::Permissions::PRINTABLE_IN_HIGH_QUALITY,
            self.can_print_degraded,
        );
        permissions.set(lopdf::Permissions::MODIFIABLE, self.can_modify);
        permissions.set(lopdf::Permissions::COPYABLE, self.can_extract_content);
        permissions.set(lopdf::Permissions::ANNOTABLE, self.can_modify_annotations);
        permissions.set(lopdf::Permissions::FILLABLE, self.can_fill_form);
        permissions.set(
            lopdf::Permissions::COPYABLE_FOR_ACCESSIBILITY,
            self.can_extract_for_accessibility,
        );
        permissions.set(lopdf::Permissions::ASSEMBLABLE, self.can_assemble_document);
        permissions
    }

    fn flag_bits(&self) -> [(bool, u32); 8] {
        [
            (self.can_print, PRINT),
            (self.can_print_degraded, PRINT_DEGRADED),
            (self.can_modify, MODIFY),
            (self.can_extract_content, EXTRACT_CONTENT),
            (self.can_modify_annotations, MODIFY_ANNOTATIONS),
            (self.can_fill_form, FILL_FORM),
            (self.can_extract_for_accessibility, EXTRACT_FOR_ACCESSIBILITY),
            (self.can_assemble_document, ASSEMBLE_DOCUMENT),
        ]
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::restricted()
    }
}

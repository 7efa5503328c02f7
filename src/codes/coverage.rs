//! Code lists of the coverage model (ISO 19123, OGC 01-004)

use crate::code_list;

code_list! {
    /// Type of values stored in a sample dimension.
    pub struct SampleDimensionType("CV_SampleDimensionType") {
        /// Unsigned 1 bit integers.
        UNSIGNED_1BIT = "CV_1BIT";
        /// Unsigned 2 bits integers.
        UNSIGNED_2BITS = "CV_2BIT";
        /// Unsigned 4 bits integers.
        UNSIGNED_4BITS = "CV_4BIT";
        /// Unsigned 8 bits integers.
        UNSIGNED_8BITS = "CV_8BIT_U";
        /// Signed 8 bits integers.
        SIGNED_8BITS = "CV_8BIT_S";
        /// Unsigned 16 bits integers.
        UNSIGNED_16BITS = "CV_16BIT_U";
        /// Signed 16 bits integers.
        SIGNED_16BITS = "CV_16BIT_S";
        /// Unsigned 32 bits integers.
        UNSIGNED_32BITS = "CV_32BIT_U";
        /// Signed 32 bits integers.
        SIGNED_32BITS = "CV_32BIT_S";
        /// Simple precision floating point numbers.
        REAL_32BITS = "CV_32BIT_REAL";
        /// Double precision floating point numbers.
        REAL_64BITS = "CV_64BIT_REAL";
    }
}

code_list! {
    /// Mapping of a sample dimension to a colour model component.
    pub struct ColorInterpretation("CV_ColorInterpretation") {
        /// Band is not associated with a color model component.
        UNDEFINED = "CV_Undefined";
        /// Band is an index into a lookup table.
        GRAY_INDEX = "CV_GrayIndex";
        /// Band is a color index into a color table.
        PALETTE_INDEX = "CV_PaletteIndex";
        /// Bands correspond to RGB color model components.
        RED_BAND = "CV_RedBand";
        /// Bands correspond to RGB color model components.
        GREEN_BAND = "CV_GreenBand";
        /// Bands correspond to RGB color model components.
        BLUE_BAND = "CV_BlueBand";
        /// Bands correspond to RGB color model components, alpha band may or may not be present.
        ALPHA_BAND = "CV_AlphaBand";
        /// Bands correspond to HSL color model.
        HUE_BAND = "CV_HueBand";
        /// Bands correspond to HSL color model.
        SATURATION_BAND = "CV_SaturationBand";
        /// Bands correspond to HSL color model.
        LIGHTNESS_BAND = "CV_LightnessBand";
        /// Bands correspond to CMYK color model.
        CYAN_BAND = "CV_CyanBand";
        /// Bands correspond to CMYK color model.
        MAGENTA_BAND = "CV_MagentaBand";
        /// Bands correspond to CMYK color model.
        YELLOW_BAND = "CV_YellowBand";
        /// Bands correspond to CMYK color model.
        BLACK_BAND = "CV_BlackBand";
    }
}

code_list! {
    /// Method for scanning the grid points of a grid coverage.
    pub struct SequenceType("CV_SequenceType") {
        /// Sequencing is consecutive along grid lines, starting with the first grid axis.
        LINEAR = "Linear scanning";
        /// Variant of linear sequencing in which the direction of the scan is
        /// reversed on alternate grid lines.
        BOUSTROPHEDONIC = "Boustrophedonic scanning";
        /// Sequencing on diagonals in a 2-dimensional grid.
        CANTOR_DIAGONAL = "Cantor-diagonal scanning";
        /// Sequencing starting from a central grid point and spiralling outwards.
        SPIRAL = "Spiral scanning";
        /// Sequencing along a Morton curve.
        MORTON = "Morton order";
        /// Sequencing along a Hilbert curve.
        HILBERT = "Hilbert order";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeList;

    #[test]
    fn test_sample_dimension_identifiers() {
        assert_eq!(SampleDimensionType::value_of("cv_8bit_u"), Some(SampleDimensionType::UNSIGNED_8BITS));
        assert_eq!(SampleDimensionType::REAL_64BITS.identifier(), Some("CV_64BIT_REAL"));
    }

    #[test]
    fn test_sequence_type_identifiers_with_spaces() {
        assert_eq!(SequenceType::lookup("linear scanning"), Some(SequenceType::LINEAR));
        assert_eq!(SequenceType::lookup("HILBERT"), Some(SequenceType::HILBERT));
        assert!(SequenceType::lookup("Peano order").is_none());
    }

    #[test]
    fn test_color_interpretation_order() {
        let values = ColorInterpretation::values();
        assert_eq!(values[0], ColorInterpretation::UNDEFINED);
        assert_eq!(values[13], ColorInterpretation::BLACK_BAND);
    }
}

//! Code lists of the referencing standard (ISO 19111, ISO 19115)

use crate::code_list;

code_list! {
    /// Direction of positive increase in the coordinate value for a coordinate system axis.
    pub struct AxisDirection("CS_AxisDirection") {
        /// Unknown or unspecified axis orientation.
        OTHER = "CS_AxisOrientationEnum.CS_AO_Other";
        /// Axis positive direction is north.
        NORTH = "north";
        /// Axis positive direction is approximately north-north-east.
        NORTH_NORTH_EAST = "northNorthEast";
        /// Axis positive direction is approximately north-east.
        NORTH_EAST = "northEast";
        /// Axis positive direction is approximately east-north-east.
        EAST_NORTH_EAST = "eastNorthEast";
        /// Axis positive direction is π/2 radians clockwise from north.
        EAST = "east";
        /// Axis positive direction is approximately east-south-east.
        EAST_SOUTH_EAST = "eastSouthEast";
        /// Axis positive direction is approximately south-east.
        SOUTH_EAST = "southEast";
        /// Axis positive direction is approximately south-south-east.
        SOUTH_SOUTH_EAST = "southSouthEast";
        /// Axis positive direction is π radians clockwise from north.
        SOUTH = "south";
        /// Axis positive direction is approximately south-south-west.
        SOUTH_SOUTH_WEST = "southSouthWest";
        /// Axis positive direction is approximately south-west.
        SOUTH_WEST = "southWest";
        /// Axis positive direction is approximately west-south-west.
        WEST_SOUTH_WEST = "westSouthWest";
        /// Axis positive direction is 3π/2 radians clockwise from north.
        WEST = "west";
        /// Axis positive direction is approximately west-north-west.
        WEST_NORTH_WEST = "westNorthWest";
        /// Axis positive direction is approximately north-west.
        NORTH_WEST = "northWest";
        /// Axis positive direction is approximately north-north-west.
        NORTH_NORTH_WEST = "northNorthWest";
        /// Axis positive direction is up relative to gravity.
        UP = "up";
        /// Axis positive direction is down relative to gravity.
        DOWN = "down";
        /// Axis positive direction is in the equatorial plane from the centre
        /// of the modelled earth towards the intersection with the prime meridian.
        GEOCENTRIC_X = "geocentricX";
        /// Axis positive direction is in the equatorial plane towards longitude 90°E.
        GEOCENTRIC_Y = "geocentricY";
        /// Axis positive direction is towards the north pole along the earth rotation axis.
        GEOCENTRIC_Z = "geocentricZ";
        /// Axis positive direction is towards the future.
        FUTURE = "future";
        /// Axis positive direction is towards the past.
        PAST = "past";
        /// Axis positive direction is towards higher pixel column.
        COLUMN_POSITIVE = "columnPositive";
        /// Axis positive direction is towards lower pixel column.
        COLUMN_NEGATIVE = "columnNegative";
        /// Axis positive direction is towards higher pixel row.
        ROW_POSITIVE = "rowPositive";
        /// Axis positive direction is towards lower pixel row.
        ROW_NEGATIVE = "rowNegative";
        /// Axis positive direction is right in display.
        DISPLAY_RIGHT = "displayRight";
        /// Axis positive direction is left in display.
        DISPLAY_LEFT = "displayLeft";
        /// Axis positive direction is towards top of approximately vertical display surface.
        DISPLAY_UP = "displayUp";
        /// Axis positive direction is towards bottom of approximately vertical display surface.
        DISPLAY_DOWN = "displayDown";
    }
}

code_list! {
    /// Specification of the way the image grid is associated with the image data attributes.
    pub struct PixelInCell("CD_PixelInCell") {
        /// The origin of the image coordinate system is the centre of a grid cell or image pixel.
        CELL_CENTER = "cellCenter";
        /// The origin of the image coordinate system is the corner of a grid cell, or half-way
        /// between the centres of adjacent image pixels.
        CELL_CORNER = "cellCorner";
    }
}

code_list! {
    /// Type of a vertical datum.
    pub struct VerticalDatumType("CD_VerticalDatumType") {
        /// The zero value is associated with the geoid.
        GEOIDAL = "geoidal";
        /// The zero point of the vertical axis is defined by a surface that has meaning for
        /// the purpose the associated vertical measurements are used for.
        DEPTH = "depth";
        /// Atmospheric pressure is the basis for the definition of the origin.
        BAROMETRIC = "barometric";
        /// In some cases, e.g. oil exploration and production, a geological feature
        /// is used as the zero surface.
        OTHER_SURFACE = "other surface";
    }
}

code_list! {
    /// Defines type of reference system used.
    pub struct ReferenceSystemType("MD_ReferenceSystemTypeCode") {
        /// Compound spatio-parametric coordinate reference system containing an engineering
        /// coordinate reference system and a parametric reference system.
        COMPOUND_ENGINEERING_PARAMETRIC = "compoundEngineeringParametric";
        /// Compound spatio-parametric-temporal coordinate reference system.
        COMPOUND_ENGINEERING_PARAMETRIC_TEMPORAL = "compoundEngineeringParametricTemporal";
        /// Compound spatio-temporal coordinate reference system containing an engineering
        /// and a temporal coordinate reference system.
        COMPOUND_ENGINEERING_TEMPORAL = "compoundEngineeringTemporal";
        /// Compound spatial reference system containing a horizontal engineering coordinate
        /// reference system and a vertical coordinate reference system.
        COMPOUND_ENGINEERING_VERTICAL = "compoundEngineeringVertical";
        /// Compound spatio-temporal coordinate reference system containing an engineering,
        /// a vertical, and a temporal coordinate reference system.
        COMPOUND_ENGINEERING_VERTICAL_TEMPORAL = "compoundEngineeringVerticalTemporal";
        /// Compound spatio-parametric coordinate reference system containing a 2 dimensional
        /// geographic horizontal coordinate reference system and a parametric reference system.
        COMPOUND_GEOGRAPHIC2D_PARAMETRIC = "compoundGeographic2DParametric";
        /// Compound spatio-parametric-temporal coordinate reference system containing a
        /// 2 dimensional geographic horizontal, a parametric and a temporal reference system.
        COMPOUND_GEOGRAPHIC2D_PARAMETRIC_TEMPORAL = "compoundGeographic2DParametricTemporal";
        /// Compound spatio-temporal coordinate reference system containing a 2 dimensional
        /// geographic horizontal and a temporal reference system.
        COMPOUND_GEOGRAPHIC2D_TEMPORAL = "compoundGeographic2DTemporal";
        /// Compound coordinate reference system in which one constituent coordinate reference
        /// system is a horizontal geodetic one and one is a vertical one.
        COMPOUND_GEOGRAPHIC2D_VERTICAL = "compoundGeographic2DVertical";
        /// Compound spatio-temporal coordinate reference system containing a 2 dimensional
        /// geographic horizontal, a vertical, and a temporal coordinate reference system.
        COMPOUND_GEOGRAPHIC2D_VERTICAL_TEMPORAL = "compoundGeographic2DVerticalTemporal";
        /// Compound spatio-temporal coordinate reference system containing a 3 dimensional
        /// geographic and a temporal coordinate reference system.
        COMPOUND_GEOGRAPHIC3D_TEMPORAL = "compoundGeographic3DTemporal";
        /// Compound spatio-parametric coordinate reference system containing a projected
        /// horizontal coordinate reference system and a parametric reference system.
        COMPOUND_PROJECTED2D_PARAMETRIC = "compoundProjected2DParametric";
        /// Compound spatio-parametric-temporal coordinate reference system containing a
        /// projected horizontal, a parametric, and a temporal coordinate reference system.
        COMPOUND_PROJECTED2D_PARAMETRIC_TEMPORAL = "compoundProjected2DParametricTemporal";
        /// Compound spatio-temporal coordinate reference system containing a projected
        /// horizontal and a temporal coordinate reference system.
        COMPOUND_PROJECTED_TEMPORAL = "compoundProjectedTemporal";
        /// Compound spatial reference system containing a horizontal projected coordinate
        /// reference system and a vertical coordinate reference system.
        COMPOUND_PROJECTED_VERTICAL = "compoundProjectedVertical";
        /// Compound spatio-temporal coordinate reference system containing a projected
        /// horizontal, a vertical, and a temporal coordinate reference system.
        COMPOUND_PROJECTED_VERTICAL_TEMPORAL = "compoundProjectedVerticalTemporal";
        /// Coordinate reference system based on an engineering datum.
        ENGINEERING = "engineering";
        /// Engineering coordinate reference system in which the base representation of a
        /// moving object is specified.
        ENGINEERING_DESIGN = "engineeringDesign";
        /// Coordinate reference system based on an image datum.
        ENGINEERING_IMAGE = "engineeringImage";
        /// Geodetic coordinate reference system having a Cartesian 3D coordinate system.
        GEODETIC_GEOCENTRIC = "geodeticGeocentric";
        /// Geodetic coordinate reference system having an ellipsoidal 2D coordinate system.
        GEODETIC_GEOGRAPHIC2D = "geodeticGeographic2D";
        /// Geodetic coordinate reference system having an ellipsoidal 3D coordinate system.
        GEODETIC_GEOGRAPHIC3D = "geodeticGeographic3D";
        /// Spatial reference in the form of a label or code that identifies a location.
        GEOGRAPHIC_IDENTIFIER = "geographicIdentifier";
        /// Reference system that identifies a location by reference to a segment of a linear
        /// geographic feature and distance along that segment from a given point.
        LINEAR = "linear";
        /// Coordinate reference system based on a parametric datum.
        PARAMETRIC = "parametric";
        /// Coordinate reference system derived from a two-dimensional geodetic coordinate
        /// reference system by applying a map projection.
        PROJECTED = "projected";
        /// Reference system against which time is measured.
        TEMPORAL = "temporal";
        /// One-dimensional coordinate reference system based on a vertical datum.
        VERTICAL = "vertical";
    }
}

//! Code lists of the geometry model (ISO 19107)

use crate::code_list;

code_list! {
    /// Interpolation method used by a curve segment.
    pub struct CurveInterpolation("GM_CurveInterpolation") {
        /// Interpolation is linear between control points.
        LINEAR = "linear";
        /// Interpolation along geodesic curves on the ellipsoid.
        GEODESIC = "geodesic";
        /// Circular arcs through three consecutive control points.
        CIRCULAR_ARC_3_POINTS = "circularArc3Points";
        /// Circular arcs through two points with a bulge factor.
        CIRCULAR_ARC_2_POINTS_WITH_BULGE = "circularArc2PointWithBulge";
        /// Elliptical arcs.
        ELLIPTICAL = "elliptical";
        /// Clothoid (Euler spiral) segments.
        CLOTHOID = "clothoid";
        /// Conic sections.
        CONIC = "conic";
        /// Polynomial spline.
        POLYNOMIAL_SPLINE = "polynomialSpline";
        /// Cubic spline.
        CUBIC_SPLINE = "cubicSpline";
        /// Rational spline.
        RATIONAL_SPLINE = "rationalSpline";
    }
}

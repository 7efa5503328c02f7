//! Display-style enumerations of the GO-1 portrayal model
//!
//! These code lists carry no ISO identifier. Their values are named in
//! mixed case and most of them have a short description.

use crate::code_list;

code_list! {
    /// How the end points of a graphic arc are connected.
    pub struct ArcClosure {
        /// Open arc, no line segments connect the end points.
        OPEN : "Open arc, with no path segment connecting the two ends";
        /// Closed by a straight line segment from start to end.
        CHORD : "Closed by drawing a straight line segment from the start of the arc to its end";
        /// Closed by line segments from start to the centre of the ellipse to the end.
        PIE : "Closed by drawing line segments from the start of the arc to the center of the full ellipse and back to the end";
    }
}

code_list! {
    /// Map projection known to a portrayal service.
    pub struct ProjectionKey {
        ADAMS_EQUAL_AREA("AdamsEqualArea");
        AIRY_MINIMUM_ERROR_AZIMUTHAL("AiryMinimumErrorAzimuthal");
        AITOFF("Aitoff");
        AITOFF_EQUAL_AREA("AitoffEqualArea");
        AITOFF_WAGNER("AitoffWagner");
        ALBERS_EQUAL_AREA_CONIC("AlbersEqualAreaConic");
        AUGUST("August");
        BEHRMANN("Behrmann");
        BIPOLAR_OBLIQUE_CONIC_CONFORMAL("BipolarObliqueConicConformal");
        BOGGS_EUMORPHIC("BoggsEumorphic");
        BONNE("Bonne");
        BRIESEMEISTER("Briesemeister");
        CASSINI("Cassini");
        CRASTER_PARABOLIC("CrasterParabolic");
        CYLINDRICAL_EQUAL_AREA("CylindricalEqualArea");
        DOUBLE_STEREOGRAPHIC("DoubleStereographic");
        ECKERT_I("EckertI");
        ECKERT_II("EckertII");
        ECKERT_III("EckertIII");
        ECKERT_IV("EckertIV");
        ECKERT_V("EckertV");
        ECKERT_VI("EckertVI");
        EISENLOHR("Eisenlohr");
        EQUIDISTANT_AZIMUTHAL("EquidistantAzimuthal");
        EQUIDISTANT_CONIC("EquidistantConic");
        EQUIDISTANT_CYLINDRICAL("EquidistantCylindrical")
            : "Equidistant Cylindrical projection, AKA Geographic, Unprojected, or Equirectangular";
        EQUIRECTANGULAR("Equirectangular") : "Equivalent to Equidistant Cylindrical";
        GALL_STEREOGRAPHIC("GallStereographic");
        GAUSS_KRUGER("GaussKruger") : "Equivalent to Transverse Mercator";
        GENERAL_PERSPECTIVE("GeneralPerspective");
        GINZBURG("Ginzburg");
        GLOBULAR("Globular");
        GNOMONIC("Gnomonic");
        GOODE_HOMOLOSINE("GoodeHomolosine");
        GUYOU("Guyou") : "Guyou's Doubly Periodic Projection";
        HAMMER("Hammer");
        HAMMER_AITOFF("Hammer_Aitoff");
        HOTINE_OBLIQUE_MERCATOR("HotineObliqueMercator") : "Ellipsoidal Oblique Mercator projection";
        LAGRANGE("Lagrange");
        LAMBERT_AZIMUTHAL_EQUAL_AREA("LambertAzimuthalEqualArea");
        LAMBERT_CONFORMAL_CONIC("LambertConformalConic");
        LASKOWSKI_TRI_OPTIMAL("LaskowskiTriOptimal");
        LOXIMUTHAL("Loximuthal");
        MCBRYDE("McBryde");
        MERCATOR("Mercator");
        MILLER_CYLINDRICAL("MillerCylindrical");
        MODIFIED_STEREOGRAPHIC_CONFORMAL("ModifiedStereographicConformal");
        MOLLWEIDE("Mollweide");
        OBLIQUE_MERCATOR("ObliqueMercator") : "Spherical Oblique Mercator projection";
        OBLIQUE_MOLLWEIDE("ObliqueMollweide");
        ORTHOGRAPHIC("Orthographic");
        PLATE_CARREE("PlateCarree");
        POLYCONIC("Polyconic");
        QUARTIC_AUTHALIC("QuarticAuthalic") : "Quartic Authalic or Adams Orthembadic Projection";
        ROBINSON("Robinson");
        SINUSOIDAL("Sinusoidal");
        SPACE_OBLIQUE_MERCATOR("SpaceObliqueMercator");
        STEREOGRAPHIC("Stereographic");
        TIMES("Times");
        TRANSVERSE_CYLINDRICAL_EQUAL_AREA("TransverseCylindricalEqualArea");
        TRANSVERSE_MERCATOR("TransverseMercator");
        TWO_POINT_EQUIDISTANT("TwoPointEquidistant");
        VANDER_GRINTEN("VanderGrinten");
        VANDER_GRINTEN_IV("VanderGrintenIV");
        WINKEL_I("WinkelI");
        WINKEL_II("WinkelII");
        WINKEL_TRIPEL("WinkelTripel");
    }
}

//! Code lists of the metadata standard (ISO 19115, ISO 19157)

use crate::code_list;

code_list! {
    /// Code which indicates conditions which may affect the image.
    pub struct ImagingCondition("MD_ImagingConditionCode") {
        /// Portion of the image is blurred.
        BLURRED_IMAGE = "blurredImage";
        /// Portion of the image is partially obscured by cloud cover.
        CLOUD = "cloud";
        /// Acute angle between the plane of the ecliptic and the plane of the celestial equator.
        DEGRADING_OBLIQUITY = "degradingObliquity";
        /// Portion of the image is partially obscured by fog.
        FOG = "fog";
        /// Portion of the image is partially obscured by heavy smoke or dust.
        HEAVY_SMOKE_OR_DUST = "heavySmokeOrDust";
        /// Image was taken at night.
        NIGHT = "night";
        /// Image was taken during rainfall.
        RAIN = "rain";
        /// Image was taken during semi-dark conditions (twilight).
        SEMI_DARKNESS = "semiDarkness";
        /// Portion of the image is obscured by shadow.
        SHADOW = "shadow";
        /// Portion of the image is obscured by snow.
        SNOW = "snow";
        /// The absence of collection data of a given point or area caused by
        /// the relative location of topographic features, obstacles or
        /// biological objects.
        TERRAIN_MASKING = "terrainMasking";
    }
}

code_list! {
    /// Justification for the correlation of two datasets.
    pub struct AssociationType("DS_AssociationTypeCode") {
        /// Reference from one dataset to another.
        CROSS_REFERENCE = "crossReference";
        /// Reference to a master dataset of which this one is a part.
        LARGER_WORK_CITATION = "largerWorkCitation";
        /// Part of the same structured set of data held in a computer.
        PART_OF_SEAMLESS_DATABASE = "partOfSeamlessDatabase";
        /// Mapping and charting information from which the dataset content originates.
        SOURCE = "source";
        /// Part of a set of imagery that when used together, provides
        /// three-dimensional images.
        STEREO_MATE = "stereoMate";
        /// Reference to resources that are parts of this resource.
        IS_COMPOSED_OF = "isComposedOf";
        /// Common title for a collection of resources.
        COLLECTIVE_TITLE = "collectiveTitle";
    }
}

code_list! {
    /// Function performed by the responsible party.
    pub struct Role("CI_RoleCode") {
        /// Party that supplies the resource.
        RESOURCE_PROVIDER = "resourceProvider";
        /// Party that accepts accountability and responsibility for the data.
        CUSTODIAN = "custodian";
        /// Party that owns the resource.
        OWNER = "owner";
        /// Party who uses the resource.
        USER = "user";
        /// Party who distributes the resource.
        DISTRIBUTOR = "distributor";
        /// Party who created the resource.
        ORIGINATOR = "originator";
        /// Party who can be contacted for acquiring knowledge about or acquisition of the resource.
        POINT_OF_CONTACT = "pointOfContact";
        /// Key party responsible for gathering information and conducting research.
        PRINCIPAL_INVESTIGATOR = "principalInvestigator";
        /// Party who has processed the data in a manner such that the resource has been modified.
        PROCESSOR = "processor";
        /// Party who published the resource.
        PUBLISHER = "publisher";
        /// Party who authored the resource.
        AUTHOR = "author";
        /// Party who speaks for the resource.
        SPONSOR = "sponsor";
        /// Party who jointly authors the resource.
        CO_AUTHOR = "coAuthor";
        /// Party who assists with the generation of the resource other than the principal investigator.
        COLLABORATOR = "collaborator";
        /// Party who reviewed or modified the resource to improve the content.
        EDITOR = "editor";
        /// A class of entity that mediates access to the resource.
        MEDIATOR = "mediator";
        /// Party owning or managing rights over the resource.
        RIGHTS_HOLDER = "rightsHolder";
        /// Party contributing to the resource.
        CONTRIBUTOR = "contributor";
        /// Party providing monetary support for the resource.
        FUNDER = "funder";
        /// Party who has an interest in the resource or the use of the resource.
        STAKEHOLDER = "stakeholder";
    }
}

code_list! {
    /// Mode in which the data is represented.
    pub struct PresentationForm("CI_PresentationFormCode") {
        /// Digital representation of a primarily textual item.
        DOCUMENT_DIGITAL = "documentDigital";
        /// Representation of a primarily textual item on paper, photographic material, or other media.
        DOCUMENT_HARDCOPY = "documentHardcopy";
        /// Likeness of natural or man-made features, objects, and activities acquired digitally.
        IMAGE_DIGITAL = "imageDigital";
        /// Likeness of natural or man-made features reproduced on paper or other media.
        IMAGE_HARDCOPY = "imageHardcopy";
        /// Map represented in raster or vector form.
        MAP_DIGITAL = "mapDigital";
        /// Map printed on paper, photographic material, or other media.
        MAP_HARDCOPY = "mapHardcopy";
        /// Multi-dimensional digital representation of a feature, process, etc.
        MODEL_DIGITAL = "modelDigital";
        /// 3-dimensional, physical model.
        MODEL_HARDCOPY = "modelHardcopy";
        /// Vertical cross-section in digital form.
        PROFILE_DIGITAL = "profileDigital";
        /// Vertical cross-section printed on paper, etc.
        PROFILE_HARDCOPY = "profileHardcopy";
        /// Digital representation of facts or figures systematically displayed, especially in columns.
        TABLE_DIGITAL = "tableDigital";
        /// Representation of facts or figures systematically displayed, on paper or other media.
        TABLE_HARDCOPY = "tableHardcopy";
        /// Digital video recording.
        VIDEO_DIGITAL = "videoDigital";
        /// Video recording on film.
        VIDEO_HARDCOPY = "videoHardcopy";
        /// Digital audio recording.
        AUDIO_DIGITAL = "audioDigital";
        /// Audio recording delivered by analog media, such as a magnetic tape.
        AUDIO_HARDCOPY = "audioHardcopy";
        /// Information representation using simultaneously various digital modes for text, sound, image.
        MULTIMEDIA_DIGITAL = "multimediaDigital";
        /// Information representation using simultaneously various analog modes for text, sound, image.
        MULTIMEDIA_HARDCOPY = "multimediaHardcopy";
        /// A physical object.
        PHYSICAL_OBJECT = "physicalObject";
        /// Information represented graphically by charts such as pie chart, bar chart, etc.
        DIAGRAM_DIGITAL = "diagramDigital";
        /// Information represented graphically by charts, printed on paper or other media.
        DIAGRAM_HARDCOPY = "diagramHardcopy";
    }
}

code_list! {
    /// Limitation(s) placed upon the access or use of the data.
    pub struct Restriction("MD_RestrictionCode") {
        /// Exclusive right to the publication, production, or sale of the rights to a work.
        COPYRIGHT = "copyright";
        /// Government has granted exclusive right to make, sell, use or license an invention.
        PATENT = "patent";
        /// Produced or sold information awaiting a patent.
        PATENT_PENDING = "patentPending";
        /// A name, symbol, or other device identifying a product, officially registered.
        TRADEMARK = "trademark";
        /// Formal permission to do something. The 2003 spelling `license` is accepted too.
        LICENCE = "licence" ["license"];
        /// Rights to financial benefit from and control of distribution of non-tangible property.
        INTELLECTUAL_PROPERTY_RIGHTS = "intellectualPropertyRights";
        /// Withheld from general circulation or disclosure.
        RESTRICTED = "restricted";
        /// Limitation not listed.
        OTHER_RESTRICTIONS = "otherRestrictions";
        /// No constraints exist.
        UNRESTRICTED = "unrestricted";
        /// Formal permission not required to use the resource.
        LICENCE_UNRESTRICTED = "licenceUnrestricted";
        /// Formal permission required for a person or an entity to use the resource.
        LICENCE_END_USER = "licenceEndUser";
        /// Formal permission required for a person or an entity to commercialize or distribute the resource.
        LICENCE_DISTRIBUTOR = "licenceDistributor";
        /// Protects rights of individual or organisations from observation, intrusion, or attention of others.
        PRIVATE = "private";
        /// Prescribed by law.
        STATUTORY = "statutory";
        /// Not available to the public.
        CONFIDENTIAL = "confidential";
        /// Although unclassified, requires strict controls over its distribution.
        SENSITIVE_BUT_UNCLASSIFIED = "sensitiveButUnclassified";
        /// With trust.
        IN_CONFIDENCE = "in-confidence";
    }
}

code_list! {
    /// Name of the character coding standard used for the resource.
    ///
    /// Each value also answers to the matching character set name
    /// (`UTF-8`, `ISO-8859-1`, `Shift_JIS`, ...).
    pub struct CharacterSet("MD_CharacterSetCode") {
        /// 16-bit fixed size Universal Character Set.
        UCS_2 = "ucs2" ["UCS-2"];
        /// 32-bit fixed size Universal Character Set.
        UCS_4 = "ucs4" ["UCS-4"];
        /// 7-bit variable size UCS Transfer Format.
        UTF_7 = "utf7" ["UTF-7"];
        /// 8-bit variable size UCS Transfer Format.
        UTF_8 = "utf8" ["UTF-8"];
        /// 16-bit variable size UCS Transfer Format.
        UTF_16 = "utf16" ["UTF-16"];
        /// Western European.
        ISO_8859_1 = "8859part1" ["ISO-8859-1"];
        /// Central European.
        ISO_8859_2 = "8859part2" ["ISO-8859-2"];
        /// South European.
        ISO_8859_3 = "8859part3" ["ISO-8859-3"];
        /// North European.
        ISO_8859_4 = "8859part4" ["ISO-8859-4"];
        /// Cyrillic.
        ISO_8859_5 = "8859part5" ["ISO-8859-5"];
        /// Arabic.
        ISO_8859_6 = "8859part6" ["ISO-8859-6"];
        /// Greek.
        ISO_8859_7 = "8859part7" ["ISO-8859-7"];
        /// Hebrew.
        ISO_8859_8 = "8859part8" ["ISO-8859-8"];
        /// Turkish.
        ISO_8859_9 = "8859part9" ["ISO-8859-9"];
        /// Nordic.
        ISO_8859_10 = "8859part10" ["ISO-8859-10"];
        /// Thai.
        ISO_8859_11 = "8859part11" ["ISO-8859-11"];
        /// A future ISO/IEC 8-bit single-byte coded graphic character set.
        ISO_8859_12 = "8859part12" ["ISO-8859-12"];
        /// Baltic Rim.
        ISO_8859_13 = "8859part13" ["ISO-8859-13"];
        /// Celtic.
        ISO_8859_14 = "8859part14" ["ISO-8859-14"];
        /// Latin 9 (Western European with the euro sign).
        ISO_8859_15 = "8859part15" ["ISO-8859-15"];
        /// Latin 10 (South-Eastern European).
        ISO_8859_16 = "8859part16" ["ISO-8859-16"];
        /// Japanese code set used for electronic transmission.
        JIS = "jis" ["JIS_X0201"];
        /// Japanese code set used on MS-DOS machines.
        SHIFT_JIS = "shiftJIS" ["Shift_JIS"];
        /// Japanese code set used on UNIX based machines.
        EUC_JP = "eucJP" ["EUC-JP"];
        /// United States ASCII code set (ISO 646 US).
        US_ASCII = "usAscii" ["US-ASCII"];
        /// IBM mainframe code set.
        EBCDIC = "ebcdic";
        /// Korean code set.
        EUC_KR = "eucKR" ["EUC-KR"];
        /// Traditional Chinese code set used in Taiwan, Hong Kong, and other areas.
        BIG_5 = "big5" ["Big5"];
        /// Simplified Chinese code set.
        GB2312 = "GB2312" ["GB2312"];
    }
}

code_list! {
    /// Structure for reporting a complex data quality result.
    pub struct ValueStructure("DQM_ValueStructure") {
        /// Finite, unordered collection of related items that may be repeated.
        BAG = "bag";
        /// Unordered collection of related items with no repetition.
        SET = "set";
        /// Finite, ordered collection of related items that may be repeated.
        SEQUENCE = "sequence";
        /// An arrangement of data in which each item may be identified by means of arguments or keys.
        TABLE = "table";
        /// Rectangular array of numbers.
        MATRIX = "matrix";
        /// Feature that acts as a function to return values from its range.
        COVERAGE = "coverage";
    }
}

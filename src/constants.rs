//! Format constants and the recognized parameter allow-list
//!
//! Bruker ParaVision writes parameter files in a JCAMP-DX derived layout:
//! every parameter block starts with `##`, modifiable parameters carry a
//! `$` marker, and array values follow an `( N )` size header.

// =============================================================================
// File Layout
// =============================================================================

/// Delimiter that opens every parameter block
pub const BLOCK_DELIMITER: &str = "##";

/// Marker for modifiable parameters; carries no meaning for parsing
pub const PARAMETER_MARKER: char = '$';

/// Residual block character stripped from single-line reco blocks
pub const RECO_RESIDUAL_MARKER: char = '#';

/// Separator between parameter name and value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Default file name suffixes inside a subject folder
pub const METHOD_FILE_SUFFIX: &str = "method";
pub const RECO_FILE_SUFFIX: &str = "reco";
pub const PIXEL_DATA_FILE_SUFFIX: &str = "2dseq";
pub const ACQ_PARAMS_FILE_SUFFIX: &str = "acqp";

// =============================================================================
// Derivation Keys
// =============================================================================

/// Reco file keys consumed by the acquisition derivation
pub mod reco_keys {
    pub const FOV: &str = "RECO_fov";
    pub const SIZE: &str = "RECO_size";
    pub const WORD_TYPE: &str = "RECO_wordtype";
}

/// Method file keys consumed by the acquisition derivation
pub mod method_keys {
    pub const SLICE_THICKNESS: &str = "PVM_DwUsedSliceThick";
    pub const DIFFUSION_DIRECTIONS: &str = "PVM_DwNDiffDir";
    pub const B0_IMAGES: &str = "PVM_DwAoImages";
    pub const B_VALUES: &str = "PVM_DwBvalEach";
    pub const SLICE_PACK_SLICES: &str = "PVM_SPackArrNSlices";
    pub const REPETITIONS: &str = "PVM_NRepetitions";
    pub const DIRECTION_TABLE: &str = "PVM_DwDir";
}

/// RECO_wordtype values and the pixel encodings they select
pub mod word_types {
    pub const SIGNED_16: &str = "_16BIT_SGN_INT";
    pub const SIGNED_32: &str = "_32BIT_SGN_INT";
    pub const UNSIGNED_8: &str = "_8BIT_UNSGN_INT";
    pub const FLOAT_32: &str = "_32BIT_FLOAT";
}

/// RECO_fov is stored in centimetres; voxel sizes are reported in millimetres
pub const FOV_CM_TO_MM: f64 = 10.0;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of subject pipelines run concurrently in batch mode
pub const DEFAULT_WORKERS: usize = 4;

/// Upper bound on configured workers
pub const MAX_WORKERS: usize = 256;

// =============================================================================
// Recognized Parameters
// =============================================================================

/// Parameter names projected out of method and reco files.
///
/// Both files share this single list. Keys outside it are dropped during
/// projection so unknown vendor parameters never break parsing.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "Method",
    "EchoTime",
    "PVM_MinEchoTime",
    "NSegments",
    "PVM_RepetitionTime",
    "PackDel",
    "PVM_NAverages",
    "PVM_NRepetitions",
    "PVM_ScanTimeStr",
    "SignalType",
    "PVM_UserType",
    "PVM_DeriveGains",
    "PVM_EncUseMultiRec",
    "PVM_EncActReceivers",
    "PVM_EncZfRead",
    "PVM_EncPpiAccel1",
    "PVM_EncPftAccel1",
    "PVM_EncPpiRefLines1",
    "PVM_EncZfAccel1",
    "PVM_EncOrder1",
    "PVM_EncStart1",
    "PVM_EncMatrix",
    "PVM_EncSteps1",
    "PVM_EncCentralStep1",
    "PVM_EncTotalAccel",
    "PVM_EncNReceivers",
    "PVM_EncAvailReceivers",
    "PVM_EncChanScaling",
    "PVM_OperationMode",
    "ExcPulseEnum",
    "ExcPulse",
    "RefPulseEnum",
    "RefPulse",
    "PVM_GradCalConst",
    "PVM_Nucleus1Enum",
    "PVM_Nucleus1",
    "PVM_RefAttMod1",
    "PVM_RefAttCh1",
    "PVM_RefAttStat1",
    "PVM_Nucleus2Enum",
    "PVM_Nucleus3Enum",
    "PVM_Nucleus4Enum",
    "PVM_Nucleus5Enum",
    "PVM_Nucleus6Enum",
    "PVM_Nucleus7Enum",
    "PVM_Nucleus8Enum",
    "RephaseTime",
    "PVM_EffSWh",
    "PVM_EpiNavigatorMode",
    "PVM_EpiPrefixNavYes",
    "PVM_EpiGradSync",
    "PVM_EpiRampMode",
    "PVM_EpiRampForm",
    "PVM_EpiRampComp",
    "PVM_EpiNShots",
    "PVM_EpiEchoPosition",
    "PVM_EpiRampTime",
    "PVM_EpiSlope",
    "PVM_EpiEffSlope",
    "PVM_EpiBlipTime",
    "PVM_EpiSwitchTime",
    "PVM_EpiEchoDelay",
    "PVM_EpiModuleTime",
    "PVM_EpiGradDwellTime",
    "PVM_EpiAutoGhost",
    "PVM_EpiAcqDelayTrim",
    "PVM_EpiBlipAsym",
    "PVM_EpiReadAsym",
    "PVM_EpiReadDephTrim",
    "PVM_EpiEchoTimeShifting",
    "PVM_EpiEchoShiftA",
    "PVM_EpiEchoShiftB",
    "PVM_EpiDriftCorr",
    "PVM_EpiGrappaThresh",
    "PVM_EpiEchoSpacing",
    "PVM_EpiEffBandwidth",
    "PVM_EpiDephaseTime",
    "PVM_EpiDephaseRampTime",
    "PVM_EpiPlateau",
    "PVM_EpiAcqDelay",
    "PVM_EpiInterTime",
    "PVM_EpiReadDephGrad",
    "PVM_EpiReadOddGrad",
    "PVM_EpiReadEvenGrad",
    "PVM_EpiPhaseDephGrad",
    "PVM_EpiPhaseRephGrad",
    "PVM_EpiBlipOddGrad",
    "PVM_EpiBlipEvenGrad",
    "PVM_EpiPhaseEncGrad",
    "PVM_EpiPhaseRewGrad",
    "PVM_EpiNEchoes",
    "PVM_EpiEchoCounter",
    "PVM_EpiRampUpIntegral",
    "PVM_EpiRampDownIntegral",
    "PVM_EpiBlipIntegral",
    "PVM_EpiSlopeFactor",
    "PVM_EpiSlewRate",
    "PVM_EpiNSamplesPerScan",
    "PVM_EpiPrefixNavSize",
    "PVM_EpiPrefixNavDur",
    "PVM_EpiNScans",
    "PVM_EpiNInitNav",
    "PVM_EpiAdjustMode",
    "PVM_EpiReadCenter",
    "PVM_EpiPhaseCorrection",
    "PVM_EpiGrappaCoefficients",
    "BwScale",
    "PVM_TrajectoryMeasurement",
    "PVM_UseTrajectory",
    "PVM_ExSliceRephaseTime",
    "SliceSpoilerDuration",
    "SliceSpoilerStrength",
    "PVM_DigAutSet",
    "PVM_DigQuad",
    "PVM_DigFilter",
    "PVM_DigRes",
    "PVM_DigDw",
    "PVM_DigSw",
    "PVM_DigNp",
    "PVM_DigShift",
    "PVM_DigGroupDel",
    "PVM_DigDur",
    "PVM_DigEndDelMin",
    "PVM_DigEndDelOpt",
    "PVM_GeoMode",
    "PVM_SpatDimEnum",
    "PVM_Isotropic",
    "PVM_Fov",
    "PVM_FovCm",
    "PVM_SpatResol",
    "PVM_Matrix",
    "PVM_MinMatrix",
    "PVM_MaxMatrix",
    "PVM_AntiAlias",
    "PVM_MaxAntiAlias",
    "PVM_SliceThick",
    "PVM_ObjOrderScheme",
    "PVM_ObjOrderList",
    "PVM_NSPacks",
    "PVM_SPackArrNSlices",
    "PVM_MajSliceOri",
    "PVM_SPackArrSliceOrient",
    "PVM_SPackArrReadOrient",
    "PVM_SPackArrReadOffset",
    "PVM_SPackArrPhase1Offset",
    "PVM_SPackArrPhase2Offset",
    "PVM_SPackArrSliceOffset",
    "PVM_SPackArrSliceGapMode",
    "PVM_SPackArrSliceGap",
    "PVM_SPackArrSliceDistance",
    "PVM_SPackArrGradOrient",
    "Reco_mode",
    "NDummyScans",
    "PVM_TriggerModule",
    "PVM_TaggingOnOff",
    "PVM_TaggingPulse",
    "PVM_TaggingDeriveGainMode",
    "PVM_TaggingMode",
    "PVM_TaggingDir",
    "PVM_TaggingDistance",
    "PVM_TaggingMinDistance",
    "PVM_TaggingThick",
    "PVM_TaggingOffset1",
    "PVM_TaggingOffset2",
    "PVM_TaggingAngle",
    "PVM_TaggingDelay",
    "PVM_TaggingModuleTime",
    "PVM_TaggingPulseNumber",
    "PVM_TaggingPulseElement",
    "PVM_TaggingGradientStrength",
    "PVM_TaggingSpoilGrad",
    "PVM_TaggingSpoilDuration",
    "PVM_TaggingGridDelay",
    "PVM_TaggingD0",
    "PVM_TaggingD1",
    "PVM_TaggingD2",
    "PVM_TaggingD3",
    "PVM_TaggingD4",
    "PVM_TaggingD5",
    "PVM_TaggingP0",
    "PVM_TaggingLp0",
    "PVM_TaggingGradAmp1",
    "PVM_TaggingGradAmp2",
    "PVM_TaggingGradAmp3",
    "PVM_TaggingGradAmp4",
    "PVM_TaggingSpoiler",
    "PVM_FatSupOnOff",
    "PVM_MagTransOnOff",
    "PVM_FovSatOnOff",
    "PVM_FovSatNSlices",
    "PVM_FovSatSliceOrient",
    "PVM_FovSatThick",
    "PVM_FovSatOffset",
    "PVM_FovSatSliceVec",
    "PVM_SatSlicesPulseEnum",
    "PVM_SatSlicesPulse",
    "PVM_SatSlicesDeriveGainMode",
    "PVM_FovSatGrad",
    "PVM_FovSatSpoilTime",
    "PVM_FovSatSpoilGrad",
    "PVM_FovSatModuleTime",
    "PVM_FovSatFL",
    "PVM_SatD0",
    "PVM_SatD1",
    "PVM_SatD2",
    "PVM_SatP0",
    "PVM_SatLp0",
    "PVM_TriggerOutOnOff",
    "PVM_TriggerOutMode",
    "PVM_TriggerOutDelay",
    "PVM_TrigOutD0",
    "PVM_PreemphasisSpecial",
    "PVM_PreemphasisFileEnum",
    "PVM_EchoTime1",
    "PVM_EchoTime2",
    "PVM_EchoTime",
    "PVM_NEchoImages",
    "EchoRepTime",
    "SegmRepTime",
    "SegmDuration",
    "SegmNumber",
    "PVM_InversionTime",
    "PVM_EchoPosition",
    "SequenceOptimizationMode",
    "EchoPad",
    "RFSpoilerOnOff",
    "SpoilerDuration",
    "SpoilerStrength",
    "NDummyEchoes",
    "Mdeft_PreparationMode",
    "Mdeft_ExcPulseEnum",
    "Mdeft_ExcPulse",
    "Mdeft_InvPulseEnum",
    "Mdeft_InvPulse",
    "Mdeft_PrepDeriveGainMode",
    "Mdeft_PrepSpoilTime",
    "Mdeft_PrepMinSpoilTime",
    "Mdeft_PrepSpoilGrad",
    "Mdeft_PrepModuleTime",
    "PVM_ppgMode1",
    "PVM_ppgFreqList1Size",
    "PVM_ppgFreqList1",
    "PVM_ppgGradAmp1",
    "EffectiveTE",
    "PVM_RareFactor",
    "PVM_SliceBandWidthScale",
    "PVM_ReadDephaseTime",
    "PVM_2dPhaseGradientTime",
    "PVM_EvolutionOnOff",
    "PVM_SelIrOnOff",
    "PVM_FatSupprPulseEnum",
    "PVM_FatSupprPulse",
    "PVM_FatSupDeriveGainMode",
    "PVM_FatSupBandWidth",
    "PVM_FatSupSpoilTime",
    "PVM_FatSupSpoilGrad",
    "PVM_FatSupModuleTime",
    "PVM_FatSupFL",
    "PVM_FsD0",
    "PVM_FsD1",
    "PVM_FsD2",
    "PVM_FsP0",
    "PVM_InFlowSatOnOff",
    "PVM_InFlowSatNSlices",
    "PVM_InFlowSatThick",
    "PVM_InFlowSatGap",
    "PVM_InFlowSatSide",
    "PVM_FlowSatPulse",
    "PVM_FlowSatDeriveGainMode",
    "PVM_InFlowSatSpoilTime",
    "PVM_InFlowSatSpoilGrad",
    "PVM_InFlowSatModuleTime",
    "PVM_SfD0",
    "PVM_SfD1",
    "PVM_SfD2",
    "PVM_SfP0",
    "PVM_SfLp0",
    "PVM_MotionSupOnOff",
    "PVM_FlipBackOnOff",
    "EchoTimeMode",
    "ReadSpoilerDuration",
    "ReadSpoilerStrength",
    "PVM_MovieOnOff",
    "PVM_NMovieFrames",
    "TimeForMovieFrames",
    "PVM_BlBloodOnOff",
    "PVM_ppgFlag1",
    "PVM_DwAoImages",
    "PVM_DwNDiffDir",
    "PVM_DwNDiffExp",
    "PVM_DwNDiffExpEach",
    "PVM_DwBvalEach",
    "PVM_DwEffBval",
    "PVM_DwDir",
    "PVM_DwGradVec",
    "PVM_DwUsedSliceThick",
    "RECO_fov",
    "RECO_size",
    "RECO_ft_size",
    "RECO_byte_order",
    "RECO_wordtype",
    "RECO_map_mode",
    "RECO_map_percentile",
    "RECO_map_error",
    "RECO_map_range",
];

/// Check whether a parameter name is on the allow-list
pub fn is_recognized(key: &str) -> bool {
    RECOGNIZED_KEYS.contains(&key)
}

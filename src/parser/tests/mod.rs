//! Shared fixtures for parameter parser tests
//!
//! The fixtures mirror the layout ParaVision 6 writes for a diffusion EPI
//! scan: a JCAMP-DX preamble, `$$` comment lines, array size headers and an
//! `##END=` terminator.

use std::io::Write;
use tempfile::NamedTempFile;

mod decoder_tests;
mod reader_tests;

/// Method file for a three-direction diffusion scan
pub fn create_test_method() -> String {
    r#"##TITLE=Parameter List, ParaVision 6.0.1
##JCAMPDX=4.24
##DATATYPE=Parameter Values
##ORIGIN=Bruker BioSpin MRI GmbH
##OWNER=nmrsu
$$ Tue Mar 14 10:22:31 2017 EDT (UT-4h)  nmrsu
$$ /opt/PV6.0.1/data/nmrsu/nmr/20170314/3/method
##$Method=<Bruker:DtiEpi>
##$PVM_EchoTime=22.5
##$PVM_NRepetitions=2
##$PVM_DwAoImages=1
##$PVM_DwNDiffDir=3
##$PVM_DwNDiffExpEach=1
##$PVM_DwBvalEach=( 2 )
0 1000
##$PVM_DwUsedSliceThick=0.5
##$PVM_DwDir=( 3, 3 )
1 0 0 0 0.7071 0.7071
0 0 1
##$PVM_SPackArrNSlices=( 1 )
20
##$PVM_FatSupOnOff=On
##$PVM_VendorPrivateFlag=Yes
##END=
"#
    .to_string()
}

/// Reco file matching [`create_test_method`]
pub fn create_test_reco() -> String {
    r#"##TITLE=Parameter List, ParaVision 6.0.1
##JCAMPDX=4.24
##DATATYPE=Parameter Values
##ORIGIN=Bruker BioSpin MRI GmbH
##OWNER=nmrsu
$$ Tue Mar 14 10:24:02 2017 EDT (UT-4h)  nmrsu
$$ /opt/PV6.0.1/data/nmrsu/nmr/20170314/3/pdata/1/reco
##$RECO_mode=FT
##$RECO_wordtype=_16BIT_SGN_INT
##$RECO_size=( 2 )
128 128
##$RECO_fov=( 2 )
3 3
##$RECO_map_mode=ABSOLUTE_MAPPING
##$RECO_map_percentile=( 2 )
0.01 99.99
##END=
"#
    .to_string()
}

/// Write content to a temporary file
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

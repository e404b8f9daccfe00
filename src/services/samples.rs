use std::str::FromStr;
use crate::services::export::ExportError;

/// Template preferences upload
pub const PREFERENCES_SAMPLE: &str = "Chooser,Chosen
Alice Johnson,Bob Smith
Bob Smith,Alice Johnson
Charlie Brown,Diana Ross
Diana Ross,Charlie Brown
Emma Wilson,Frank Miller
Frank Miller,Grace Lee
Grace Lee,Henry Chen
Henry Chen,Isabella Garcia
Isabella Garcia,Jack Taylor
Jack Taylor,Katie Adams
Katie Adams,Liam Brown
Liam Brown,Mia Davis
Mia Davis,Noah Wilson
Noah Wilson,Olivia Martin
Olivia Martin,Peter Jones
Peter Jones,Quinn Roberts
Quinn Roberts,Rachel White
Rachel White,Samuel Green
Samuel Green,Tina Black
Tina Black,Uma Patel
Uma Patel,Victor Chang
Victor Chang,Uma Patel
Wendy Liu,Xavier Martinez
Xavier Martinez,Wendy Liu
Yolanda Kim,Zach Thompson
Zach Thompson,Yolanda Kim
Aaron Mitchell,Bella Cooper
Bella Cooper,Aaron Mitchell
Carlos Diaz,Danielle Foster
Danielle Foster,Ethan Gray
Ethan Gray,Fiona Hughes
Fiona Hughes,George Irving
George Irving,Hannah James
Hannah James,Ivan Kelly
Ivan Kelly,Julia Long
Julia Long,Kevin Moore
Kevin Moore,Laura Nelson
Laura Nelson,Marcus Oliver
Marcus Oliver,Nina Perry";

/// Template restrictions upload
pub const RESTRICTIONS_SAMPLE: &str = "Student,Forbidden Partner
Alice Johnson,Charlie Brown
Emma Wilson,Grace Lee
Jack Taylor,Liam Brown
Olivia Martin,Quinn Roberts
Victor Chang,Xavier Martinez";

/// Downloadable upload templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Preferences,
    Restrictions,
}

impl SampleKind {
    pub fn content(&self) -> &'static str {
        match self {
            SampleKind::Preferences => PREFERENCES_SAMPLE,
            SampleKind::Restrictions => RESTRICTIONS_SAMPLE,
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            SampleKind::Preferences => "student_preferences_sample.csv",
            SampleKind::Restrictions => "teacher_restrictions_sample.csv",
        }
    }
}

impl FromStr for SampleKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preferences" => Ok(SampleKind::Preferences),
            "restrictions" => Ok(SampleKind::Restrictions),
            other => Err(ExportError::UnknownKind(other.to_string())),
        }
    }
}

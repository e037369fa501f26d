use std::fs::{create_dir_all, File};
use std::io::{Error as IOError, Write};
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.json";
pub const LEXICON_FILE: &str = "lexicon.csv";
pub const TRANSITION_FILE: &str = "transition.def";
pub const ABBREVIATION_FILE: &str = "abbreviations.txt";

pub fn write_settings_json<P: AsRef<Path>>(path: P) -> Result<(), IOError> {
  let path = path.as_ref();
  if !path.exists() {
    if let Some(p) = path.parent() {
      if !p.exists() {
        create_dir_all(p)?;
      }
    }
    File::create(path)?.write_all(SETTINGS_JSON.as_bytes())
  } else {
    Ok(())
  }
}

pub fn write_resources<P: AsRef<Path>>(dir: P) -> Result<(), IOError> {
  let dir = dir.as_ref();
  if !dir.exists() {
    create_dir_all(dir)?;
  }
  for (name, content) in &[
    (LEXICON_FILE, LEXICON_CSV),
    (TRANSITION_FILE, TRANSITION_DEF),
    (ABBREVIATION_FILE, ABBREVIATIONS_TXT),
  ] {
    if !dir.join(name).exists() {
      File::create(dir.join(name))?.write_all(content.as_bytes())?;
    }
  }
  Ok(())
}

const SETTINGS_JSON: &str = r#"{
  "lexiconFiles" : [ "lexicon.csv" ],
  "transitionFile" : "transition.def",
  "abbreviationFile" : "abbreviations.txt",
  "outputMode" : "single",
  "reportFileName" : "zemberek_comparison.txt",
  "outputPrefix" : "zemberek_",
  "parallel" : false
}
"#;

const LEXICON_CSV: &str = "# surface,lemma,pos,cost
Ali,Ali,Noun,0
Ayşe,Ayşe,Noun,0
Ahmet,Ahmet,Noun,0
ev,ev,Noun,0
eve,ev,Noun,0
evde,ev,Noun,0
evden,ev,Noun,0
evi,ev,Noun,0
okul,okul,Noun,0
okula,okul,Noun,0
okulda,okul,Noun,0
kitap,kitap,Noun,0
kitabı,kitap,Noun,0
kitaplar,kitap,Noun,0
elma,elma,Noun,0
elması,elma,Noun,0
su,su,Noun,0
yol,yol,Noun,0
yolu,yol,Noun,0
gün,gün,Noun,0
bugün,bugün,Adv,0
bugün,bugün,Noun,10
yarın,yarın,Adv,0
yarın,yarın,Noun,10
dün,dün,Adv,0
dün,dün,Noun,10
git,git,Verb,0
gitti,git,Verb,0
gidiyor,git,Verb,0
gel,gel,Verb,0
geldi,gel,Verb,0
geliyor,gel,Verb,0
oku,oku,Verb,0
okudu,oku,Verb,0
okuyor,oku,Verb,0
al,al,Verb,0
aldı,al,Verb,0
yüz,yüz,Num,0
yüz,yüz,Noun,5
yüz,yüz,Verb,10
bir,bir,Num,0
bir,bir,Det,0
bir,bir,Adv,20
çok,çok,Adv,0
çok,çok,Det,5
güzel,güzel,Adj,0
güzel,güzel,Adv,5
büyük,büyük,Adj,0
küçük,küçük,Adj,0
yeni,yeni,Adj,0
ben,ben,Pron,0
sen,sen,Pron,0
o,o,Pron,0
o,o,Det,0
bu,bu,Pron,0
bu,bu,Det,0
şu,şu,Pron,0
şu,şu,Det,0
ve,ve,Conj,0
ama,ama,Conj,0
ile,ile,Conj,5
ile,ile,Postp,0
için,için,Postp,0
gibi,gibi,Postp,0
mi,mi,Ques,0
mı,mı,Ques,0
mu,mu,Ques,0
mü,mü,Ques,0
ah,ah,Interj,0
evet,evet,Interj,0
hayır,hayır,Interj,0
";

const TRANSITION_DEF: &str = "# left right cost
* * 500
BOS * 300
* EOS 300
BOS Punc 900
Adj Noun 100
Det Noun 100
Det Adj 150
Num Noun 100
Adv Verb 100
Adv Adj 200
Noun Verb 200
Noun Noun 300
Noun Postp 150
Noun Conj 250
Conj Noun 250
Pron Verb 200
Verb Punc 50
Noun Punc 150
Verb EOS 100
Punc EOS 50
";

const ABBREVIATIONS_TXT: &str = "# one abbreviation per line
Dr.
Prof.
Doç.
Av.
Bkz.
vb.
vs.
örn.
St.
Sn.
";

//! Trimmed-down pages in the shape each dictionary site serves.

use lexicard_types::Language;

pub const MERRIAM_WEBSTER_RUN: &str = r#"<html><body><div class="vg">
  <div class="vg-sseq-entry-item">
    <div class="sb-0 sb-entry"><span class="dtText"><strong>:</strong> to go faster than a walk</span></div>
    <div class="sb-1 sb-entry"><span class="letter">b</span> <span class="dtText"><strong>:</strong> to go steadily by springing steps</span></div>
  </div>
  <div class="vg-sseq-entry-item">
    <div class="sb-0 sb-entry"><span class="dtText">: to take flight</span></div>
  </div>
  <div class="vg-sseq-entry-item">
    <div class="sb-0 sb-entry"><span class="dtText">: to move on wheels (1) : as a vehicle (2) : in a race</span></div>
  </div>
</div></body></html>"#;

pub const LAROUSSE_EN_DE_RUN: &str = r#"<html><body>
<div class="content en-de"><span class="Adresse">run</span> <span class="Indicateur">1.</span> laufen; he runs.
  <span class="Indicateur">2.</span> Running: rennen</div>
<div class="content en-de">runner <span>1.</span> Läufer</div>
</body></html>"#;

pub const LAROUSSE_EN_FR_RUN: &str = r#"<html><body><div id="BlocArticle">
  <div class="itemZONESEM">[person, animal] courir</div>
  <div class="itemZONESEM">[flee] s'enfuir</div>
  <div class="itemZONESEM">[function] marcher</div>
</div></body></html>"#;

pub const LAROUSSE_EN_ES_RUN: &str = r#"<html><body><div class="content en-es">
  <span>run</span> Conjugation <span>1.</span> <a href="/x">cor<b>rer</b></a> <span>2.</span> huir
</div></body></html>"#;

pub const LAROUSSE_FR_COURIR: &str = r#"<html><body><ul>
  <li class="DivisionDefinition">Se déplacer rapidement.Par extension : aller vite. Synonymes : filer - foncer</li>
  <li class="DivisionDefinition">Littéraire. S'écouler. Contraire : stagner</li>
</ul></body></html>"#;

pub const RAE_CASA: &str = r#"<html><body><div id="resultados"><article>
  <p class="j"><span class="n_acep">1.</span> <abbr>f.</abbr> Edificio para habitar . <span>Sin.:</span> vivienda, hogar.</p>
  <p class="j"><span class="n_acep">2.</span> <abbr>f.</abbr> Familia , linaje . 3</p>
</article></div></body></html>"#;

pub const MICHAELIS_SELVAGEM: &str = r#"<html><body><div id="main-container"><div class="verbete">
  <span class="headword">sel·va·gem</span> adj m+f
  1 Próprio das selvas.
  2 Que não é domesticado.
  3 V acepções 1 a 2 .
  sm+f 4 Pessoa rude.
  selvagens sf pl Indígenas.
  ETIMOLOGIA lat silvaticus.
</div></div></body></html>"#;

pub const MICHAELIS_NO_ENTRY: &str = r#"<html><body><div id="main-container">
  <p>O verbete não foi encontrado.</p> Tente outra busca.
</div></body></html>"#;

/// (language, id, word, page) for every built-in dictionary
pub fn pages() -> Vec<(Language, u8, &'static str, &'static str)> {
    vec![
        (Language::En, 1, "run", MERRIAM_WEBSTER_RUN),
        (Language::En, 2, "run", LAROUSSE_EN_DE_RUN),
        (Language::En, 3, "run", LAROUSSE_EN_FR_RUN),
        (Language::En, 4, "run", LAROUSSE_EN_ES_RUN),
        (Language::Fr, 1, "courir", LAROUSSE_FR_COURIR),
        (Language::Es, 1, "casa", RAE_CASA),
        (Language::Pt, 1, "selvagem", MICHAELIS_SELVAGEM),
    ]
}

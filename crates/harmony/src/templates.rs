//! Chord quality templates and chroma correlation.

use crate::chroma::BarChroma;

/// A chord quality template: extension label, interval set from the root,
/// and a weight multiplied into its correlation score.
#[derive(Debug)]
pub struct ChordTemplate {
    pub name: &'static str,
    pub pitch_classes: &'static [u8],
    pub weight: f64,
}

/// All scored templates, in scan order.
pub static TEMPLATES: &[ChordTemplate] = &[
    // Triads
    ChordTemplate { name: "", pitch_classes: &[0, 4, 7], weight: 1.0 },
    ChordTemplate { name: "(m3)", pitch_classes: &[0, 3, 7], weight: 1.0 },
    ChordTemplate { name: "(m3)(b5)", pitch_classes: &[0, 3, 6], weight: 1.0 },
    ChordTemplate { name: "(m3)(b5)[add6]", pitch_classes: &[0, 3, 6, 9], weight: 1.0 },
    ChordTemplate { name: "(+)", pitch_classes: &[0, 4, 8], weight: 0.8 },
    // Suspensions
    ChordTemplate { name: "(sus2)", pitch_classes: &[0, 2, 7], weight: 0.85 },
    ChordTemplate { name: "(sus4)", pitch_classes: &[0, 5, 7], weight: 0.85 },
    // Sevenths; (m3)(M7) shares its pattern with (m3)(m7) and only the
    // weight separates them.
    ChordTemplate { name: "(M7)", pitch_classes: &[0, 4, 7, 11], weight: 0.7 },
    ChordTemplate { name: "(m3)(m7)", pitch_classes: &[0, 3, 7, 10], weight: 0.9 },
    ChordTemplate { name: "(m3)(M7)", pitch_classes: &[0, 3, 7, 10], weight: 0.8 },
    ChordTemplate { name: "(m7)", pitch_classes: &[0, 4, 7, 10], weight: 1.0 },
    ChordTemplate { name: "(m3)(m7)(b5)", pitch_classes: &[0, 3, 6, 10], weight: 0.95 },
];

/// One template placed at a concrete root.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMatch {
    pub root: u8,
    pub template: &'static ChordTemplate,
}

impl TemplateMatch {
    /// Absolute pitch classes of the placed template, sorted ascending.
    pub fn pitch_classes(&self) -> Vec<u8> {
        let mut classes: Vec<u8> = self
            .template
            .pitch_classes
            .iter()
            .map(|&pc| (pc + self.root) % 12)
            .collect();
        classes.sort_unstable();
        classes
    }
}

/// Scores the chroma against every template at every root and returns all
/// tied-maximum matches, in (root, template) scan order.
///
/// A bass note adds 0.2 to its bin first; the boost stays in the chroma so
/// downstream tonality scoring sees it too. A flat or empty chroma has no
/// defined correlation and yields no matches.
pub fn correlate(chroma: &mut BarChroma) -> Vec<TemplateMatch> {
    if let Some(bass) = chroma.bass {
        chroma.vector[usize::from(bass)] += 0.2;
    }

    let mut scored = Vec::with_capacity(12 * TEMPLATES.len());
    for root in 0..12u8 {
        for template in TEMPLATES {
            let mut pattern = [0.0; 12];
            for &pc in template.pitch_classes {
                pattern[usize::from((pc + root) % 12)] = 1.0;
            }
            let score = pearson(&chroma.vector, &pattern) * template.weight;
            scored.push((score, TemplateMatch { root, template }));
        }
    }

    // NaN scores lose both the fold and the equality filter, so a flat
    // chroma falls through to an empty result.
    let best = scored
        .iter()
        .map(|&(score, _)| score)
        .fold(f64::NEG_INFINITY, f64::max);
    if best == f64::NEG_INFINITY {
        return Vec::new();
    }
    scored
        .into_iter()
        .filter(|&(score, _)| score == best)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Pearson correlation over the twelve bins. NaN when either side has zero
/// variance.
fn pearson(a: &[f64; 12], b: &[f64; 12]) -> f64 {
    let mean_a = a.iter().sum::<f64>() / 12.0;
    let mean_b = b.iter().sum::<f64>() / 12.0;
    let mut covariance = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        covariance += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a) * (x - mean_a);
        var_b += (y - mean_b) * (y - mean_b);
    }
    covariance / (var_a * var_b).sqrt()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chroma_over(classes: &[u8], bass: Option<u8>) -> BarChroma {
        let mut vector = [0.0; 12];
        for &pc in classes {
            vector[usize::from(pc)] = 1.0 / classes.len() as f64;
        }
        BarChroma { vector, bass }
    }

    fn names(matches: &[TemplateMatch]) -> Vec<(u8, &'static str)> {
        matches.iter().map(|m| (m.root, m.template.name)).collect()
    }

    #[test]
    fn clean_major_triad_is_unambiguous() {
        let mut chroma = chroma_over(&[0, 4, 7], None);
        assert_eq!(names(&correlate(&mut chroma)), [(0, "")]);

        let mut chroma = chroma_over(&[2, 6, 9], None);
        assert_eq!(names(&correlate(&mut chroma)), [(2, "")]);
    }

    #[test]
    fn equivalent_spellings_tie_in_scan_order() {
        // Csus2 and Gsus4 cover the same classes at the same weight.
        let mut chroma = chroma_over(&[0, 2, 7], None);
        assert_eq!(
            names(&correlate(&mut chroma)),
            [(0, "(sus2)"), (7, "(sus4)")]
        );
    }

    #[test]
    fn bass_bonus_selects_the_root_among_tied_candidates() {
        // A hexatonic blur ties Dm7 against Am7 until the bass weighs in;
        // the boosted D bin then hands the bar to a D-rooted reading.
        let ambiguous = [0, 2, 4, 5, 7, 9];
        let mut chroma = chroma_over(&ambiguous, None);
        assert_eq!(
            names(&correlate(&mut chroma)),
            [(2, "(m3)(m7)"), (9, "(m3)(m7)")]
        );

        let mut chroma = chroma_over(&ambiguous, Some(2));
        assert_eq!(names(&correlate(&mut chroma)), [(2, "(m3)")]);
    }

    #[test]
    fn bass_bonus_mutates_the_chroma_in_place() {
        let mut chroma = chroma_over(&[0, 4, 7], Some(0));
        let before = chroma.vector[0];
        correlate(&mut chroma);
        assert_eq!(chroma.vector[0], before + 0.2);
    }

    #[test]
    fn flat_chroma_matches_nothing() {
        let mut empty = BarChroma {
            vector: [0.0; 12],
            bass: None,
        };
        assert!(correlate(&mut empty).is_empty());

        let mut uniform = BarChroma {
            vector: [1.0 / 12.0; 12],
            bass: None,
        };
        assert!(correlate(&mut uniform).is_empty());
    }

    #[test]
    fn placed_template_reports_sorted_absolute_classes() {
        let m = TemplateMatch {
            root: 9,
            template: &TEMPLATES[8], // (m3)(m7)
        };
        assert_eq!(m.pitch_classes(), [0, 4, 7, 9]);
    }
}

use maud::{Markup, PreEscaped, html};

use super::{background_style, placeholder};
use crate::domain::content::Testimonial;

const CAROUSEL_SCRIPT: &str = r#"
(function () {
  var track = document.querySelector('.testimonial-track');
  if (!track) { return; }
  var slides = track.children;
  var index = 0;
  function show(next) {
    index = (next + slides.length) % slides.length;
    for (var i = 0; i < slides.length; i++) {
      slides[i].hidden = i !== index;
    }
  }
  document.querySelectorAll('[data-carousel-step]').forEach(function (button) {
    button.addEventListener('click', function () {
      show(index + Number(button.dataset.carouselStep));
    });
  });
  show(0);
})();
"#;

/// Testimonial carousel over an optional background image.
pub fn testimonials_section(testimonials: &[Testimonial], background: Option<&str>) -> Markup {
    if testimonials.is_empty() {
        return placeholder("Testimonials");
    }
    let style = background.map(background_style);
    html! {
        section.testimonials id="testimonials" style=[style] {
            h2 { "What Families Say" }
            div.testimonial-track {
                @for testimonial in testimonials {
                    figure.testimonial {
                        @if let Some(url) = testimonial.image.as_ref().and_then(|image| image.url()) {
                            img.testimonial-photo src=(url) alt=(testimonial.display_name()) loading="lazy";
                        }
                        blockquote { (testimonial.preview_text()) }
                        figcaption {
                            strong { (testimonial.display_name()) }
                            @if let Some(role) = &testimonial.role {
                                span.role { (role) }
                            }
                        }
                    }
                }
            }
            @if testimonials.len() > 1 {
                div.carousel-controls {
                    button type="button" data-carousel-step="-1" aria-label="Previous" { "‹" }
                    button type="button" data-carousel-step="1" aria-label="Next" { "›" }
                }
                script { (PreEscaped(CAROUSEL_SCRIPT)) }
            }
        }
    }
}

//! Fixed GROQ queries, one per content kind.
//!
//! Projections dereference image assets (`asset->{url}`) so views receive
//! resolved CDN URLs. Slug-keyed queries bind `$slug`.

use super::ports::ContentQuery;

pub const HERO: ContentQuery = ContentQuery::new(
    "hero",
    r#"*[_type == "hero"][0] {
  headline,
  subheadline,
  backgroundMedia {
    mediaType,
    videoUrl,
    image { asset->{url}, alt }
  },
  ctaText,
  ctaUrl
}"#,
);

pub const NAVIGATION: ContentQuery = ContentQuery::new(
    "navigation",
    r#"*[_type == "navigation"][0] {
  logo { asset->{url}, alt },
  menuItems[] { label, url, isActive, openInNewTab },
  showBlogLink,
  showFaqLink,
  ctaButton { text, url, isVisible }
}"#,
);

pub const FOOTER: ContentQuery = ContentQuery::new(
    "footer",
    r#"*[_type == "settings"][0] {
  footer {
    footerText,
    socialLinks[] { platform, url, isVisible },
    additionalLinks[] { label, url, isVisible },
    copyrightText
  }
}"#,
);

pub const PAGE_VISIBILITY: ContentQuery = ContentQuery::new(
    "page_visibility",
    r#"*[_type == "settings"][0] {
  pageVisibility { showBlogPage, showFaqPage }
}"#,
);

pub const LEGAL_PAGE_LINKS: ContentQuery = ContentQuery::new(
    "legal_page_links",
    r#"*[_type == "page" && (title match "*terms*" || title match "*privacy*")] {
  title,
  slug
}"#,
);

pub const TESTIMONIALS_BACKGROUND: ContentQuery = ContentQuery::new(
    "testimonials_background_image",
    r#"*[_type == "settings"][0] {
  "url": testimonialsBackgroundImage.asset->url
}"#,
);

pub const CONTACT_BACKGROUND: ContentQuery = ContentQuery::new(
    "contact_background_image",
    r#"*[_type == "settings"][0] {
  "url": contactBackgroundImage.asset->url
}"#,
);

const BLOG_POSTS_GROQ: &str = r#"*[_type == "blog" && isPublished == true] | order(publishedAt desc) {
  _id,
  title,
  slug,
  excerpt,
  featuredImage { asset->{url}, alt },
  content,
  publishedAt,
  isPublished
}"#;

pub const BLOG_POSTS: ContentQuery = ContentQuery::new("blog_posts", BLOG_POSTS_GROQ);

const BLOG_POST_BY_SLUG: &str = r#"*[_type == "blog" && slug.current == $slug && isPublished == true][0] {
  _id,
  title,
  slug,
  excerpt,
  featuredImage { asset->{url}, alt },
  content,
  publishedAt,
  isPublished
}"#;

pub fn blog_post(slug: &str) -> ContentQuery {
    ContentQuery::new("blog_post", BLOG_POST_BY_SLUG).with_param("slug", slug)
}

pub const FAQS: ContentQuery = ContentQuery::new(
    "faqs",
    r#"*[_type == "faq" && isActive == true] | order(category asc, order asc) {
  _id,
  question,
  answer,
  category,
  order,
  isActive
}"#,
);

pub const SERVICES: ContentQuery = ContentQuery::new(
    "services",
    r#"*[_type == "service"] | order(order asc) {
  _id,
  title,
  slug,
  description,
  fullContent,
  icon { asset->{url}, alt },
  ctaButton,
  order
}"#,
);

const SERVICE_BY_SLUG: &str = r#"*[_type == "service" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  description,
  fullContent,
  icon { asset->{url}, alt },
  ctaButton,
  order
}"#;

pub fn service_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new("service_by_slug", SERVICE_BY_SLUG).with_param("slug", slug)
}

pub const RESOURCES: ContentQuery = ContentQuery::new(
    "resources",
    r#"*[_type == "resource"] | order(order asc) {
  _id,
  title,
  slug,
  description,
  fullContent,
  image { asset->{url}, alt },
  url,
  category,
  order
}"#,
);

const RESOURCE_BY_SLUG: &str = r#"*[_type == "resource" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  description,
  fullContent,
  image { asset->{url}, alt },
  url,
  category,
  order
}"#;

pub fn resource_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new("resource_by_slug", RESOURCE_BY_SLUG).with_param("slug", slug)
}

pub const ABOUT: ContentQuery = ContentQuery::new(
    "about",
    r#"*[_type == "about"][0] {
  _id,
  highlight,
  bio,
  image { asset->{url}, alt },
  carouselSections[] {
    title,
    image { asset->{url}, alt },
    shortDescription,
    slug,
    longDescription,
    ctaButton { isVisible, text, url, isExternal }
  }
}"#,
);

const ABOUT_SECTION_BY_SLUG: &str = r#"*[_type == "about"][0].carouselSections[slug.current == $slug][0] {
  title,
  image { asset->{url}, alt },
  shortDescription,
  slug,
  longDescription,
  ctaButton { isVisible, text, url, isExternal }
}"#;

pub fn about_section(slug: &str) -> ContentQuery {
    ContentQuery::new("about_section", ABOUT_SECTION_BY_SLUG).with_param("slug", slug)
}

pub const TESTIMONIALS: ContentQuery = ContentQuery::new(
    "testimonials",
    r#"*[_type == "testimonial"] | order(_createdAt desc) {
  _id,
  name,
  role,
  image { asset->{url}, alt },
  shortText,
  fullText,
  text
}"#,
);

const PAGE_BY_SLUG: &str = r#"*[_type == "page" && slug.current == $slug && isPublished == true][0] {
  _id,
  title,
  slug,
  content,
  metaDescription,
  isPublished,
  showInFooter,
  footerOrder
}"#;

pub fn page(slug: &str) -> ContentQuery {
    ContentQuery::new("page", PAGE_BY_SLUG).with_param("slug", slug)
}

pub const FOOTER_PAGES: ContentQuery = ContentQuery::new(
    "footer_pages",
    r#"*[_type == "page" && isPublished == true && showInFooter == true] | order(footerOrder asc) {
  _id,
  title,
  slug,
  footerOrder
}"#,
);

pub const SETTINGS: ContentQuery = ContentQuery::new(
    "settings",
    r#"*[_type == "settings"][0] {
  contactEmail,
  calendlyUrl,
  seoSettings {
    metaTitle,
    metaDescription,
    ogImage { asset->{url} }
  },
  pageVisibility { showBlogPage, showFaqPage }
}"#,
);

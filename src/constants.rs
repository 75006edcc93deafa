// DOM hooks and inline styles used by the front-end.
// Ids and class names mirror the site markup; keeping them here lets the
// host-side tests check them without a browser.

// Projects gallery
pub const PROJECTS_TRACK_ID: &str = "projectsTrack";
pub const PROJECTS_SECTION_ID: &str = "projects";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const PROJECT_IMAGE_CLASS: &str = "project-image";
pub const CARD_IMAGE_SIZES: &str = "(max-width: 768px) 280px, 350px";
pub const EXCLUDE_ATTR: &str = "data-exclude-projects";
pub const MANIFEST_URL_ATTR: &str = "data-manifest-url";
pub const ASSETS_BASE_ATTR: &str = "data-assets-base";
pub const NO_PROJECTS_TEXT: &str = "No projects data available";
pub const LOAD_ERROR_TEXT: &str = "Unable to load projects. Please try refreshing the page.";
pub const RETRY_TEXT: &str = "Retry";
pub const PROJECTS_LOADING_CLASS: &str = "projects-loading";
pub const CARD_STYLE: &str = "min-width: 350px; max-width: 350px; flex-shrink: 0; background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 20px rgba(0,0,0,0.08); cursor: pointer; transition: transform 0.3s ease;";
pub const CARD_MEDIA_STYLE: &str = "position: relative; height: 250px; overflow: hidden;";
pub const CARD_IMAGE_STYLE: &str = "width: 100%; height: 100%; object-fit: cover;";
pub const CARD_INFO_STYLE: &str = "padding: 20px;";
pub const IMAGE_PLACEHOLDER_STYLE: &str = "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #f0f0f0 0%, #e0e0e0 100%); color: #666; font-size: 14px; text-align: center;";
pub const IMAGE_UNAVAILABLE_TEXT: &str = "Image not available";

// Project viewer dialog
pub const PROJECTS_MODAL_ID: &str = "projectsModal";
pub const PROJECTS_MODAL_TITLE_ID: &str = "projects-modal-title";
pub const GALLERY_IMAGES_SELECTOR: &str = ".projects-gallery-images";
pub const GALLERY_CURRENT_SELECTOR: &str = ".projects-gallery-current";
pub const GALLERY_TOTAL_SELECTOR: &str = ".projects-gallery-total";
pub const GALLERY_PREV_SELECTOR: &str = ".projects-gallery-prev";
pub const GALLERY_NEXT_SELECTOR: &str = ".projects-gallery-next";
pub const GALLERY_CLOSE_SELECTOR: &str = ".projects-modal-close";
pub const MODAL_IMAGE_STYLE: &str =
    "max-width: 100%; max-height: 70vh; object-fit: contain; border-radius: 8px;";
pub const FOCUSABLE_SELECTOR: &str = "button, [tabindex]:not([tabindex=\"-1\"])";

// Overlay modals
pub const INTERIOR_MODAL_ID: &str = "interiorFormModal";
pub const LEAD_MODAL_ID: &str = "leadCaptureModal";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const ACTIVE_MODAL_SELECTOR: &str = ".modal.active";

// Forms
pub const INTERIOR_FORM_ID: &str = "interiorForm";
pub const INTERIOR_RESULT_ID: &str = "interiorResult";
pub const LEAD_FORM_ID: &str = "leadCaptureForm";
pub const LEAD_RESULT_ID: &str = "leadResult";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_RESULT_ID: &str = "result";
pub const FORM_STEP_SELECTOR: &str = ".form-step";
pub const OPTION_BUTTON_CLASS: &str = "option-btn";
pub const PROGRESS_FILL_ID: &str = "progressFill";
pub const PROGRESS_TEXT_ID: &str = "progressText";
pub const BUDGET_INPUT_ID: &str = "customBudget";
pub const EMAIL_INPUT_ID: &str = "interiorEmail";
pub const PHONE_INPUT_ID: &str = "interiorPhone";
pub const HARDENED_FORMS_SELECTOR: &str = "form:not(#contactForm)";
pub const FORM_ERROR_CLASS: &str = "form-error";
pub const INTERIOR_CTA_SELECTOR: &str = "[data-open=\"interior-form\"]";
pub const LEAD_CTA_SELECTOR: &str = "[data-open=\"lead-capture\"]";

// Progress messages shown while the relay is "processing"
pub const INTERIOR_PROGRESS_TEXT: &str = "Processing your request...";
pub const INTERIOR_BUTTON_BUSY: &str = "Processing...";
pub const LEAD_PROGRESS_TEXT: &str = "Submitting your details...";
pub const LEAD_BUTTON_BUSY: &str = "Submitting...";
pub const CONTACT_PROGRESS_TEXT: &str = "Sending your message...";
pub const CONTACT_BUTTON_BUSY: &str = "Sending...";
pub const RESULT_PROGRESS_STYLE: &str =
    "display:block;background-color:#e3f2fd;color:#1976d2;border:1px solid #bbdefb";

// Page chrome
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAV_LINKS_SELECTOR: &str = ".nav-menu a";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_SLIDE_SELECTOR: &str = ".hero-slide";
pub const PACKAGES_ID: &str = "packages";
pub const VIEW_PACKAGES_ID: &str = "viewPackagesBtn";
pub const PACKAGE_CATEGORY_SELECTOR: &str = ".package-category";
pub const DROPDOWN_TOGGLE_SELECTOR: &str = ".dropdown-toggle";
pub const DROPDOWN_TITLE_SELECTOR: &str = ".dropdown-title";
pub const DROPDOWN_CONTENT_SELECTOR: &str = ".dropdown-content";
pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const FAQ_ANSWER_SELECTOR: &str = ".faq-answer";
pub const ANIMATED_SELECTOR: &str = ".service-card, .package-card, .project-card, .stat-item, .feature-item, .process-step, .contact-item, .faq-item";
pub const NAVBAR_SCROLLED_STYLE: (&str, &str) =
    ("rgba(255, 255, 255, 0.98)", "0 2px 15px rgba(0,0,0,0.1)");
pub const NAVBAR_TOP_STYLE: (&str, &str) = ("rgba(255, 255, 255, 0.95)", "none");

// Scroll-in animation
pub const ANIMATE_THRESHOLD: f64 = 0.1;
pub const ANIMATE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const ANIMATE_START_TRANSFORM: &str = "translateY(20px)";
pub const ANIMATE_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

// Shared class names
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SHOW_CLASS: &str = "show";
pub const SELECTED_CLASS: &str = "selected";
pub const ERROR_CLASS: &str = "error";

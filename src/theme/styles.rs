//! Global CSS styles for the storefront.
//!
//! Slate page over a cursor-reactive gradient, light cards, and the small
//! set of utility classes that the page activities toggle.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --card-bg: rgba(255, 255, 255, 0.92);
  --card-border: rgba(15, 23, 42, 0.12);
  --ink: #1e293b;
  --ink-muted: #64748b;

  --primary: #0d6efd;
  --success: #198754;
  --info: #0dcaf0;
  --warning: #ffc107;
  --danger: #dc3545;
  --dark: #212529;

  --radius: 0.75rem;
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-family: var(--font-sans);
  color: var(--ink);
}

/* === Page shell === */
.page-scroll {
  position: fixed;
  inset: 0;
  overflow-y: auto;
  background-attachment: fixed;
}

.page {
  max-width: 1080px;
  margin: 0 auto;
  padding: 1.5rem 1rem 6rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.site-title {
  font-size: 1.75rem;
  font-weight: 700;
  color: #f8fafc;
  text-shadow: 0 1px 3px rgba(0, 0, 0, 0.35);
}

.card {
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  padding: 1.25rem;
  box-shadow: 0 8px 24px rgba(15, 23, 42, 0.15);
}

.card h2 {
  font-size: 1.25rem;
  margin-bottom: 0.75rem;
}

.two-col {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 1.5rem;
}

@media (max-width: 820px) {
  .two-col { grid-template-columns: 1fr; }
}

/* === Banner === */
.banner {
  border-radius: var(--radius);
  padding: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  transition: background var(--transition-fast);
}

/* === Products === */
.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.product-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.product-price {
  font-size: 1.125rem;
  font-weight: 600;
}

/* === Cart === */
.cart-badge {
  display: inline-block;
  min-width: 1.5rem;
  padding: 0.1rem 0.45rem;
  border-radius: 999px;
  background: var(--danger);
  color: #fff;
  font-size: 0.8rem;
  text-align: center;
}

.cart-table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.9rem;
}

.cart-table th, .cart-table td {
  padding: 0.4rem 0.25rem;
  border-bottom: 1px solid var(--card-border);
  text-align: left;
}

.cart-qty {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
}

.cart-total {
  margin-top: 0.75rem;
  font-weight: 700;
  text-align: right;
}

.cart-actions, .form-actions {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.75rem;
  flex-wrap: wrap;
}

/* === Forms === */
.form-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.form-field.wide { grid-column: 1 / -1; }

.form-label { font-size: 0.85rem; font-weight: 600; }

.form-control {
  padding: 0.45rem 0.6rem;
  border: 1px solid var(--card-border);
  border-radius: 0.4rem;
  font: inherit;
  background: #fff;
}

.form-check {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-size: 0.9rem;
}

/* === Summary === */
.summary-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  font-size: 0.9rem;
}

.summary-total {
  margin-top: 0.75rem;
  font-size: 1.25rem;
  font-weight: 700;
}

/* === Testimonials === */
.testimonials {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.testimonial {
  font-style: italic;
  padding-left: 0.75rem;
  border-left: 3px solid var(--card-border);
}

/* === Buttons === */
.btn {
  padding: 0.45rem 0.9rem;
  border: 1px solid transparent;
  border-radius: 0.4rem;
  font: inherit;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.btn:disabled { opacity: 0.45; cursor: not-allowed; }
.btn-sm { padding: 0.15rem 0.5rem; font-size: 0.85rem; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-success { background: var(--success); color: #fff; }
.btn-danger { background: var(--danger); color: #fff; }
.btn-dark { background: var(--dark); color: #fff; }
.btn-outline-secondary { background: transparent; border-color: var(--ink-muted); color: var(--ink-muted); }

/* === Utilities toggled by page activities === */
.bg-dark { background: var(--dark); }
.bg-primary { background: var(--primary); }
.bg-success { background: var(--success); }
.bg-info { background: var(--info); }
.bg-danger { background: var(--danger); }
.bg-warning { background: var(--warning); }
.bg-success.bg-opacity-10 { background: rgba(25, 135, 84, 0.1); }
.text-white { color: #fff; }
.text-dark { color: var(--dark); }
.text-primary { color: var(--primary); }
.text-danger { color: var(--danger); }
.text-warning { color: var(--warning); }
.text-muted { color: var(--ink-muted); }

/* === Notices === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.modal {
  background: #fff;
  border-radius: var(--radius);
  padding: 1.5rem;
  max-width: 420px;
  width: calc(100% - 2rem);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.toast {
  position: fixed;
  top: 1rem;
  right: 1rem;
  background: var(--dark);
  color: #fff;
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  z-index: 60;
}

/* === WhatsApp floating button === */
.whatsapp-float {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
  font-size: 1.6rem;
  text-decoration: none;
  box-shadow: 0 6px 18px rgba(0, 0, 0, 0.3);
  opacity: 0;
  transform: translateY(16px);
  pointer-events: none;
  transition: opacity 200ms ease, transform 200ms ease;
  z-index: 40;
}

.whatsapp-float.show {
  opacity: 1;
  transform: none;
  pointer-events: auto;
}

.whatsapp-float.offline { filter: grayscale(0.5); }
"#;

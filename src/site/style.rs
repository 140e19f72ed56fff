// src/site/style.rs
// Theme stylesheet written verbatim to style.css.

pub const STYLE_CSS: &str = r#"@import url('https://use.typekit.net/jxn7iyx.css');
:root {
    --bg: #0f172a;
    --sidebar: #1e293b;
    --card: #334155;
    --text: #e2e8f0;
    --green: #9fef00;
    --blue: #4589ff;
    --gray: #94a3b8;
    --hover: #475569;
}
body { font-family: 'Inter', sans-serif; background: var(--bg); color: var(--text); margin: 0; padding: 0; line-height: 1.6; }
h1, h2, h3, h4, h5, h6 { color: #ffffff !important; }
h1 { font-size: 2.5rem; margin: 1rem 0; }
h2, h3 { margin-top: 2rem; }
p { color: var(--text); }
a { color: rgb(178 242 51 / 1); text-decoration: none; transition: color 0.2s ease; }
a:hover { color: rgb(190 255 100 / 1); text-decoration: underline; }
.content { padding: 2rem; max-width: 900px; margin: 0 auto; }
pre {
    background-color: rgb(30 41 57); color: #e2e8f0; padding: 1rem;
    border-radius: 0.5rem; overflow-x: auto; margin-bottom: 1.5rem;
}
pre code { background: none; color: inherit; padding: 0; box-shadow: none; display: block; }
table { width: 100%; border-collapse: collapse; margin: 1.5rem 0; }
th, td { border: 1px solid #475569; padding: 0.75rem; text-align: left; }
th { background: var(--card); }
img { max-width: 100%; border-radius: 0.5rem; margin: 1rem 0; }
.back-link { color: rgb(178 242 51 / 1); font-weight: bold; text-decoration: none; }
.back-link:hover { text-decoration: underline; }
hr { border: 1px solid #334155; margin: 2rem 0; }

/* sidebar */
.toc-panel {
    position: fixed; top: 0; right: 0; width: 380px; height: 100%; background: var(--sidebar);
    box-shadow: -10px 0 30px rgba(0,0,0,0.5); z-index: 9999; overflow-y: auto; transition: transform 0.3s ease;
    transform: translateX(100%);
}
.toc-panel.open { transform: translateX(0); }
.toc-header {
    padding: 1.5rem; background: #242f40; display: flex; justify-content: space-between; align-items: center;
    color: white; font-weight: bold; font-size: 1.2rem; position: sticky; top: 0; z-index: 10;
}
.toc-toggle {
    position: fixed; top: 1rem; right: 1rem; z-index: 99999; background: var(--green); color: black;
    border: none; padding: 0.75rem 1rem; border-radius: 2rem; cursor: pointer; font-weight: bold;
    box-shadow: 0 4px 10px rgba(159, 239, 0, 0.3); transition: 0.2s;
}
.toc-toggle:hover { background: #bfff40; transform: scale(1.05); }
.toc-close { background: none; border: none; color: var(--gray); font-size: 1.8rem; cursor: pointer; }
.toc-close:hover { color: white; }
.toc-body { padding: 1rem; }
.toc-group { margin-bottom: 1rem; }
.toc-group-header {
    display: flex; align-items: center; padding: 1rem;
    background: var(--card); border-radius: 0.75rem; cursor: pointer;
    transition: 0.2s; font-weight: 600;
}
.toc-group-header:hover { background: var(--hover); }
.toc-num {
    background: var(--blue); color: white; width: 32px; height: 32px;
    border-radius: 50%; display: flex; align-items: center; justify-content: center;
    font-size: 1rem; margin-right: 1rem; font-weight: bold;
}
.toc-title { flex-grow: 1; }
.toc-count { color: var(--gray); font-size: 0.9rem; margin-right: 0.5rem; }
.toc-arrow { transition: transform 0.2s; color: var(--gray); }
.toc-group input { display: none; }
.toc-group input:checked ~ .toc-group-header .toc-arrow { transform: rotate(180deg); }
.toc-group input:checked ~ .toc-sections { max-height: 1000px; opacity: 1; }
.toc-sections { max-height: 0; opacity: 0; overflow: hidden; transition: all 0.3s ease; margin-top: 0.5rem; }
.toc-section {
    padding: 0.75rem 1rem; display: flex; align-items: center;
    border-bottom: 1px solid #334155; transition: 0.2s;
}
.toc-section:hover { background: #2d3748; }
.toc-section a {
    color: var(--text); text-decoration: none; flex-grow: 1; font-size: 0.95rem;
    display: flex; align-items: center;
}
.toc-section a:hover { color: white; }
.toc-icon { margin-right: 0.75rem; opacity: 0.7; width: 16px; height: 16px; }
.toc-article { color: var(--gray); font-size: 0.8rem; margin-left: auto; }
#dark-toggle {
    position: fixed; top: 1rem; left: 1rem; z-index: 99999;
    background: var(--card); color: white; border: none;
    padding: 0.75rem; border-radius: 50%; cursor: pointer; font-size: 1.2rem;
}
"#;

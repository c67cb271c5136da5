//! Templates that ship with Schemer.
//!
//! [`component`] is used when no template directory is given. It produces a
//! component class, its view, styles and a test file, all named after the
//! dasherized artifact name:
//!
//! ```text
//! <path>/<name>/
//! ├── <name>.component.ts
//! ├── <name>.component.html
//! ├── <name>.component.css
//! └── <name>.component.spec.ts
//! ```

use schemer_core::domain::FileSet;

const COMPONENT_TS: &str = "\
import { Component } from '@angular/core';

@Component({
  selector: 'app-<%= dasherize(name) %>',
  templateUrl: './<%= dasherize(name) %>.component.html',
  styleUrls: ['./<%= dasherize(name) %>.component.css'],
})
export class <%= classify(name) %>Component {}
";

const COMPONENT_HTML: &str = "<p><%= dasherize(name) %> works!</p>\n";

const COMPONENT_CSS: &str = ":host {\n  display: block;\n}\n";

const COMPONENT_SPEC: &str = "\
import { ComponentFixture, TestBed } from '@angular/core/testing';

import { <%= classify(name) %>Component } from './<%= dasherize(name) %>.component';

describe('<%= classify(name) %>Component', () => {
  let component: <%= classify(name) %>Component;
  let fixture: ComponentFixture<<%= classify(name) %>Component>;

  beforeEach(async () => {
    await TestBed.configureTestingModule({
      declarations: [<%= classify(name) %>Component],
    }).compileComponents();

    fixture = TestBed.createComponent(<%= classify(name) %>Component);
    component = fixture.componentInstance;
    fixture.detectChanges();
  });

  it('should create', () => {
    expect(component).toBeTruthy();
  });
});
";

/// Built-in component file set.
pub fn component() -> FileSet {
    FileSet::new()
        .with_file("__name@dasherize__.component.ts.template", COMPONENT_TS)
        .with_file("__name@dasherize__.component.html.template", COMPONENT_HTML)
        .with_file("__name@dasherize__.component.css.template", COMPONENT_CSS)
        .with_file("__name@dasherize__.component.spec.ts.template", COMPONENT_SPEC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemer_core::domain::TemplateContext;

    #[test]
    fn component_renders_with_name_only() {
        let ctx = TemplateContext::new().with_value("name", "userCard");
        for file in component() {
            let path = ctx.render_path(&file.path).unwrap();
            assert!(path.starts_with("user-card.component."), "{path}");
            ctx.render_content(&file.path, &file.content).unwrap();
        }
    }

    #[test]
    fn component_class_is_classified() {
        let ctx = TemplateContext::new().with_value("name", "userCard");
        let ts = component().into_iter().next().unwrap();
        let rendered = ctx.render_content(&ts.path, &ts.content).unwrap();
        assert!(rendered.contains("export class UserCardComponent {}"));
        assert!(rendered.contains("selector: 'app-user-card'"));
    }
}

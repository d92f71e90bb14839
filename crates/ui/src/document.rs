/// Fixed HTML5 document shell the rendered markup is injected into.
///
/// The application string is embedded verbatim inside the root container;
/// any escaping of interpolated text has already happened during the
/// component render.
#[must_use]
pub fn wrap(app: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
           <head>\n\
             <meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>Document</title>\n\
           </head>\n\
           <body>\n\
             <div id=\"root\">{app}</div>\n\
           </body>\n\
         </html>\n"
    )
}

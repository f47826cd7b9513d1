use crate::terminal::print;

pub const MAP_FORMAT: &str = "\
A map points one or more hosts at an IP address.

Format: 'IP <- HOST[,HOST...]'
Quote the map or escape '<' so the shell does not treat it as a redirection.

Examples:
  '192.168.1.1 <- myrouter'              maps 'myrouter' to 192.168.1.1
  \"192.168.1.1<-   myrouter\"             same, whitespace is ignored
  192.168.1.1\\<-myrouter                 same, escaping '<' (no spaces)
  '::1 <- localhost-v6'                  maps 'localhost-v6' to ::1
  '100.56.32.54 <- host1, host2, host3'  maps three hosts to 100.56.32.54";

pub fn map_format() -> anyhow::Result<()> {
    for line in MAP_FORMAT.lines() {
        print::print(line);
    }
    Ok(())
}

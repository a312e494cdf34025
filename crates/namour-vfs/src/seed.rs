//! Demo tree seeding.
//!
//! Every session starts from the same small Ubuntu-like hierarchy: a home
//! directory with a few dotfiles and notes, and `/var/log` filled with sample
//! syslog, auth, and Apache lines for `cat` and `grep` to chew on.

use namour_types::config::ShellConfig;
use namour_types::error::Result;

use crate::tree::FsTree;

/// Sample `/var/log/syslog` lines.
pub const SYSLOG: &[&str] = &[
    "Oct 17 08:00:01 ubuntu-prod-01 CRON[20114]: (root) CMD (/usr/local/bin/backup.sh)",
    "Oct 17 08:00:03 ubuntu-prod-01 systemd[1]: Started Daily apt download activities.",
    "Oct 17 08:02:17 ubuntu-prod-01 kernel: [312044.120331] EXT4-fs (sda1): mounted filesystem with ordered data mode",
    "Oct 17 08:05:42 ubuntu-prod-01 systemd[1]: Starting Cleanup of Temporary Directories...",
    "Oct 17 08:05:42 ubuntu-prod-01 systemd[1]: systemd-tmpfiles-clean.service: Succeeded.",
    "Oct 17 08:11:09 ubuntu-prod-01 kernel: [312591.004712] ata2.00: exception Emask 0x0 SAct 0x0 SErr 0x0 action 0x6 frozen",
    "Oct 17 08:11:09 ubuntu-prod-01 kernel: [312591.004790] ata2.00: failed command: READ DMA",
    "Oct 17 08:11:10 ubuntu-prod-01 kernel: [312591.918244] blk_update_request: I/O error, dev sdb, sector 1953525",
    "Oct 17 08:15:00 ubuntu-prod-01 CRON[20388]: (www-data) CMD (php /var/www/namour/cron.php)",
    "Oct 17 08:17:31 ubuntu-prod-01 mysqld[1187]: [Warning] Aborted connection 4412 to db: 'namour' user: 'app'",
    "Oct 17 08:20:55 ubuntu-prod-01 systemd[1]: apache2.service: Main process exited, code=killed, status=9/KILL",
    "Oct 17 08:20:56 ubuntu-prod-01 systemd[1]: apache2.service: Failed with result 'signal'.",
    "Oct 17 08:21:01 ubuntu-prod-01 systemd[1]: Started The Apache HTTP Server.",
    "Oct 17 08:30:12 ubuntu-prod-01 kernel: [313733.551020] Out of memory: Killed process 18233 (php-fpm7.4)",
];

/// Sample `/var/log/auth.log` lines.
pub const AUTH_LOG: &[&str] = &[
    "Oct 17 07:58:10 ubuntu-prod-01 sshd[19980]: Accepted publickey for namour from 10.0.4.21 port 51122 ssh2",
    "Oct 17 07:58:10 ubuntu-prod-01 sshd[19980]: pam_unix(sshd:session): session opened for user namour by (uid=0)",
    "Oct 17 08:03:44 ubuntu-prod-01 sshd[20201]: Failed password for invalid user admin from 185.220.101.7 port 40112 ssh2",
    "Oct 17 08:03:47 ubuntu-prod-01 sshd[20201]: Failed password for invalid user admin from 185.220.101.7 port 40112 ssh2",
    "Oct 17 08:03:51 ubuntu-prod-01 sshd[20201]: Connection closed by invalid user admin 185.220.101.7 port 40112 [preauth]",
    "Oct 17 08:09:02 ubuntu-prod-01 sudo:   namour : TTY=pts/0 ; PWD=/home/namour ; USER=root ; COMMAND=/usr/bin/apt update",
    "Oct 17 08:09:02 ubuntu-prod-01 sudo: pam_unix(sudo:session): session opened for user root by namour(uid=0)",
    "Oct 17 08:12:30 ubuntu-prod-01 sshd[20455]: Failed password for root from 45.134.26.88 port 53020 ssh2",
    "Oct 17 08:12:31 ubuntu-prod-01 sshd[20455]: error: maximum authentication attempts exceeded for root from 45.134.26.88 port 53020 ssh2 [preauth]",
    "Oct 17 08:25:19 ubuntu-prod-01 systemd-logind[845]: New session 311 of user randy.",
];

/// Sample `/var/log/apache2/access.log` lines.
pub const APACHE_ACCESS_LOG: &[&str] = &[
    "10.0.4.21 - - [17/Oct/2026:08:01:12 +0000] \"GET / HTTP/1.1\" 200 5123 \"-\" \"Mozilla/5.0\"",
    "10.0.4.21 - - [17/Oct/2026:08:01:13 +0000] \"GET /static/app.js HTTP/1.1\" 200 88412 \"/\" \"Mozilla/5.0\"",
    "66.249.66.1 - - [17/Oct/2026:08:04:55 +0000] \"GET /robots.txt HTTP/1.1\" 200 68 \"-\" \"Googlebot/2.1\"",
    "185.220.101.7 - - [17/Oct/2026:08:06:20 +0000] \"GET /wp-login.php HTTP/1.1\" 404 492 \"-\" \"python-requests/2.31\"",
    "185.220.101.7 - - [17/Oct/2026:08:06:21 +0000] \"POST /xmlrpc.php HTTP/1.1\" 404 492 \"-\" \"python-requests/2.31\"",
    "10.0.4.33 - randy [17/Oct/2026:08:14:02 +0000] \"POST /upload HTTP/1.1\" 201 312 \"/upload\" \"curl/8.4.0\"",
    "10.0.4.33 - randy [17/Oct/2026:08:14:40 +0000] \"POST /upload HTTP/1.1\" 413 380 \"/upload\" \"curl/8.4.0\"",
    "10.0.4.21 - - [17/Oct/2026:08:20:51 +0000] \"GET /api/stats HTTP/1.1\" 502 351 \"/\" \"Mozilla/5.0\"",
    "10.0.4.21 - - [17/Oct/2026:08:21:05 +0000] \"GET /api/stats HTTP/1.1\" 200 1289 \"/\" \"Mozilla/5.0\"",
];

/// Create the stock hierarchy in `tree`.
pub fn populate_demo_tree(tree: &mut FsTree) -> Result<()> {
    tree.mkdir("/home/namour/projects")?;
    tree.write(
        "/home/namour/.bash_history",
        "ls -a\ncd /var/log\nneofetch\nclear",
    )?;
    tree.write(
        "/home/namour/notes.txt",
        "System monitoring dashboard is looking great.",
    )?;
    tree.write("/home/namour/projects/README.md", "# My Projects")?;

    tree.mkdir("/var/log/apache2")?;
    tree.write("/var/log/syslog", &SYSLOG.join("\n"))?;
    tree.write("/var/log/auth.log", &AUTH_LOG.join("\n"))?;
    tree.write("/var/log/apache2/access.log", &APACHE_ACCESS_LOG.join("\n"))?;
    Ok(())
}

/// Build the tree for a session: the stock hierarchy, the configured home
/// directory, and any files listed in the configuration.
pub fn build_tree(config: &ShellConfig) -> Result<FsTree> {
    let mut tree = FsTree::new();
    populate_demo_tree(&mut tree)?;
    tree.mkdir(&config.home)?;

    for file in &config.files {
        if let Some(idx) = file.path.trim_end_matches('/').rfind('/')
            && idx > 0
        {
            tree.mkdir(&file.path[..idx])?;
        }
        tree.write(&file.path, &file.content)?;
    }

    log::info!(
        "Seeded filesystem tree ({} extra files, home {})",
        config.files.len(),
        config.home
    );
    Ok(tree)
}
